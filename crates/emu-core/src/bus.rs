//! Memory and I/O bus interface.

use std::collections::HashMap;

/// Memory and I/O bus interface.
///
/// The bus is owned by the surrounding system and handed to the CPU on each
/// tick. Every access completes immediately; timing is the CPU's concern.
pub trait Bus {
    /// Read a byte from the given memory address.
    fn read(&mut self, address: u16) -> u8;

    /// Read a byte without side effects (debuggers, disassembly).
    fn peek(&self, address: u16) -> u8;

    /// Write a byte to the given memory address.
    fn write(&mut self, address: u16, value: u8);

    /// Read a byte from an I/O port (IORQ asserted).
    fn io_read(&mut self, port: u16) -> u8 {
        let _ = port;
        0xFF
    }

    /// Write a byte to an I/O port (IORQ asserted).
    fn io_write(&mut self, port: u16, value: u8) {
        let _ = (port, value);
    }

    /// Refresh address placed on the bus during T3/T4 of an M1 cycle.
    fn refresh(&mut self, address: u16) {
        let _ = address;
    }

    /// Data bus contents during an interrupt acknowledge cycle.
    ///
    /// Floating bus reads as 0xFF, which decodes as `RST 38h` in mode 0.
    fn acknowledge(&mut self) -> u8 {
        0xFF
    }
}

/// Flat 64 KiB RAM with an I/O port map.
///
/// Used by test harnesses and the monitor. Port writes are recorded in order
/// so tests can assert on them.
pub struct SimpleBus {
    ram: Box<[u8; 0x10000]>,
    ports: HashMap<u16, u8>,
    port_writes: Vec<(u16, u8)>,
    refreshes: u64,
    last_refresh: u16,
    /// Byte the "interrupting device" places on the data bus.
    pub vector: u8,
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; 0x10000]),
            ports: HashMap::new(),
            port_writes: Vec::new(),
            refreshes: 0,
            last_refresh: 0,
            vector: 0xFF,
        }
    }

    /// Copy `data` into RAM starting at `address`, wrapping at 64 KiB.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        let mut addr = address;
        for &byte in data {
            self.ram[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Value returned by subsequent reads of `port`.
    pub fn set_port(&mut self, port: u16, value: u8) {
        self.ports.insert(port, value);
    }

    /// All port writes seen so far, oldest first.
    #[must_use]
    pub fn port_writes(&self) -> &[(u16, u8)] {
        &self.port_writes
    }

    /// Number of refresh cycles observed.
    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    /// Address of the most recent refresh cycle.
    #[must_use]
    pub fn last_refresh(&self) -> u16 {
        self.last_refresh
    }
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn peek(&self, address: u16) -> u8 {
        self.ram[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.ram[address as usize] = value;
    }

    fn io_read(&mut self, port: u16) -> u8 {
        // Fall back to an 8-bit port match before the floating bus value.
        self.ports
            .get(&port)
            .or_else(|| self.ports.get(&(port & 0x00FF)))
            .copied()
            .unwrap_or(0xFF)
    }

    fn io_write(&mut self, port: u16, value: u8) {
        self.port_writes.push((port, value));
    }

    fn refresh(&mut self, address: u16) {
        self.refreshes += 1;
        self.last_refresh = address;
    }

    fn acknowledge(&mut self) -> u8 {
        self.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_wraps_at_top_of_memory() {
        let mut bus = SimpleBus::new();
        bus.load(0xFFFF, &[0x11, 0x22]);
        assert_eq!(bus.peek(0xFFFF), 0x11);
        assert_eq!(bus.peek(0x0000), 0x22);
    }

    #[test]
    fn io_read_falls_back_to_low_byte() {
        let mut bus = SimpleBus::new();
        bus.set_port(0x00FE, 0x1F);
        assert_eq!(bus.io_read(0x7FFE), 0x1F);
        assert_eq!(bus.io_read(0x7FFD), 0xFF);
    }
}
