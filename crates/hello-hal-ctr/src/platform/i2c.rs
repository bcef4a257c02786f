//! ARM9 I2C controller driven as an `embedded-hal` bus.
//!
//! The controller shifts one byte per command: software loads `DATA`, writes a
//! command to `CNT`, then waits for the busy bit to drop. Start, stop, read
//! direction and ACK are all bits of that command byte.

use embedded_hal::i2c::{
    self, ErrorKind, ErrorType, NoAcknowledgeSource, Operation, SevenBitAddress,
};

use super::mmio;

/// Bus 1 (power MCU and friends).
pub const I2C1_BASE: usize = 0x1016_1000;

const REG_DATA: usize = 0x00;
const REG_CNT: usize = 0x01;

const CNT_STOP: u8 = 1 << 0;
const CNT_START: u8 = 1 << 1;
const CNT_PAUSE: u8 = 1 << 2;
const CNT_ACK: u8 = 1 << 4;
const CNT_READ: u8 = 1 << 5;
const CNT_IRQ: u8 = 1 << 6;
const CNT_BUSY: u8 = 1 << 7;

const CMD_BYTE: u8 = CNT_BUSY | CNT_IRQ;
const CMD_ABORT: u8 = CMD_BYTE | CNT_PAUSE | CNT_STOP;

/// Raw access to one controller's `DATA`/`CNT` pair.
pub trait I2cRegisters {
    fn data(&mut self) -> u8;
    fn set_data(&mut self, value: u8);
    fn cnt(&mut self) -> u8;
    fn set_cnt(&mut self, value: u8);
}

/// Memory-mapped controller registers.
#[derive(Debug)]
pub struct MmioI2c {
    base: usize,
}

impl MmioI2c {
    /// # Safety
    ///
    /// `base` must be an I2C controller base and no other
    /// `MmioI2c` may drive the same controller.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }
}

impl I2cRegisters for MmioI2c {
    fn data(&mut self) -> u8 {
        unsafe { mmio::read(self.base + REG_DATA) }
    }

    fn set_data(&mut self, value: u8) {
        unsafe { mmio::write(self.base + REG_DATA, value) }
    }

    fn cnt(&mut self) -> u8 {
        unsafe { mmio::read(self.base + REG_CNT) }
    }

    fn set_cnt(&mut self, value: u8) {
        unsafe { mmio::write(self.base + REG_CNT, value) }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum I2cError {
    /// The addressed device (or a written byte) was not acknowledged.
    NoAcknowledge(NoAcknowledgeSource),
}

impl i2c::Error for I2cError {
    fn kind(&self) -> ErrorKind {
        match *self {
            Self::NoAcknowledge(source) => ErrorKind::NoAcknowledge(source),
        }
    }
}

/// Byte-at-a-time I2C master.
#[derive(Debug)]
pub struct I2cBus<R = MmioI2c> {
    regs: R,
}

impl I2cBus<MmioI2c> {
    /// Bus 1, where the power MCU lives.
    ///
    /// # Safety
    ///
    /// Must be called at most once.
    pub unsafe fn bus1() -> Self {
        Self::new(unsafe { MmioI2c::new(I2C1_BASE) })
    }
}

impl<R> I2cBus<R>
where
    R: I2cRegisters,
{
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    pub fn release(self) -> R {
        self.regs
    }

    fn wait_idle(&mut self) {
        while self.regs.cnt() & CNT_BUSY != 0 {}
    }

    fn acked(&mut self) -> bool {
        self.wait_idle();
        self.regs.cnt() & CNT_ACK != 0
    }

    fn command(&mut self, data: Option<u8>, cnt: u8) {
        self.wait_idle();
        if let Some(data) = data {
            self.regs.set_data(data);
        }
        self.regs.set_cnt(cnt);
    }

    fn start(&mut self, address: SevenBitAddress, read: bool) -> Result<(), I2cError> {
        self.command(Some((address << 1) | read as u8), CMD_BYTE | CNT_START);
        if !self.acked() {
            return Err(I2cError::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        Ok(())
    }

    fn write_byte(&mut self, byte: u8, stop: bool) -> Result<(), I2cError> {
        let stop = if stop { CNT_STOP } else { 0 };
        self.command(Some(byte), CMD_BYTE | stop);
        if !self.acked() {
            return Err(I2cError::NoAcknowledge(NoAcknowledgeSource::Data));
        }
        Ok(())
    }

    fn read_byte(&mut self, last: bool, stop: bool) -> u8 {
        let mut cnt = CMD_BYTE | CNT_READ;
        if !last {
            cnt |= CNT_ACK;
        }
        if stop {
            cnt |= CNT_STOP;
        }
        self.command(None, cnt);
        self.wait_idle();
        self.regs.data()
    }

    fn abort(&mut self) {
        self.command(None, CMD_ABORT);
        self.wait_idle();
    }

    fn run(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), I2cError> {
        let count = operations.len();
        let mut reading = None;

        for (index, operation) in operations.iter_mut().enumerate() {
            let last_op = index + 1 == count;

            match operation {
                Operation::Write(bytes) => {
                    if reading != Some(false) {
                        self.start(address, false)?;
                    }
                    for (i, &byte) in bytes.iter().enumerate() {
                        self.write_byte(byte, last_op && i + 1 == bytes.len())?;
                    }
                    if last_op && bytes.is_empty() {
                        self.abort();
                    }
                    reading = Some(false);
                }
                Operation::Read(buffer) => {
                    if reading != Some(true) {
                        self.start(address, true)?;
                    }
                    let len = buffer.len();
                    for (i, slot) in buffer.iter_mut().enumerate() {
                        let last = i + 1 == len;
                        *slot = self.read_byte(last, last_op && last);
                    }
                    if last_op && len == 0 {
                        self.abort();
                    }
                    reading = Some(true);
                }
            }
        }

        Ok(())
    }
}

impl<R> ErrorType for I2cBus<R> {
    type Error = I2cError;
}

impl<R> i2c::I2c<SevenBitAddress> for I2cBus<R>
where
    R: I2cRegisters,
{
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let result = self.run(address, operations);
        if result.is_err() {
            self.abort();
        }
        result
    }
}
