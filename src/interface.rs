//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and two implementations
//! for talking to the SSD1306 controller:
//!
//! - [`SpiInterface`]: 4-wire SPI (SPI device + D/C pin + reset pin)
//! - [`I2cInterface`]: I2C with control-byte framing
//!
//! ## Hardware Requirements
//!
//! In 4-wire SPI mode the SSD1306 requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output, low = command)
//!   - **RST**: Reset (output, active low)
//!
//! In I2C mode only SDA/SCL are needed. Every transfer starts with a control
//! byte: `0x00` for commands, `0x40` for display data.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1306::{DisplayInterface, SpiInterface};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! // Create interface with SPI and GPIO pins
//! let mut interface = SpiInterface::new(MockSpi, MockPin, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0xAF); // Display on
//!
//! // Send data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, Operation as I2cOperation};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of SSD1306 modules (SA0 low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// I2C control byte announcing a command
const I2C_CONTROL_COMMAND: u8 = 0x00;

/// I2C control byte announcing display data
const I2C_CONTROL_DATA: u8 = 0x40;

/// Trait for hardware interface to the SSD1306 controller
///
/// This trait abstracts over the bus the controller is attached to,
/// allowing the [`Display`](crate::display::Display) to work with any
/// implementation that can move command and data bytes.
///
/// ## Implementing
///
/// For most cases, use [`SpiInterface`] or [`I2cInterface`]. Implement this
/// trait yourself for other wirings (3-wire SPI, parallel bus, test doubles).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one command byte to the controller
    ///
    /// Command parameters are command bytes too and go through this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display data bytes to the controller
    ///
    /// The bytes land in GDDRAM at the current address pointer.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Drive the hardware reset line
    ///
    /// `active == true` holds the controller in reset (RST low). Interfaces
    /// without a reset line do nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO fails.
    fn set_reset(&mut self, active: bool) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// SPI or I2C transfer error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// 4-wire SPI interface implementation
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct SpiInterface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new SPI interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Bus)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Bus)?;
        Ok(())
    }

    fn set_reset(&mut self, active: bool) -> InterfaceResult<(), Self::Error> {
        if active {
            self.rst.set_low().map_err(InterfaceError::Pin)
        } else {
            self.rst.set_high().map_err(InterfaceError::Pin)
        }
    }
}

/// I2C interface implementation
///
/// Prefixes every transfer with the SSD1306 control byte. Data writes are sent
/// as one transaction so a full page goes out without a repeated start.
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Create a new I2C interface at [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new I2C interface at a custom 7-bit address (0x3D with SA0 high)
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, Infallible>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[I2C_CONTROL_COMMAND, command])
            .map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .transaction(
                self.address,
                &mut [
                    I2cOperation::Write(&[I2C_CONTROL_DATA]),
                    I2cOperation::Write(data),
                ],
            )
            .map_err(InterfaceError::Bus)
    }

    fn set_reset(&mut self, _active: bool) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::i2c::ErrorType as I2cErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    #[derive(Debug, Default)]
    struct MockSpi {
        writes: Vec<Vec<u8>>,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations {
                if let embedded_hal::spi::Operation::Write(bytes) = op {
                    self.writes.push(bytes.to_vec());
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockPin {
        high: Option<bool>,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = Some(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = Some(true);
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockI2c {
        frames: Vec<(u8, Vec<u8>)>,
    }

    impl I2cErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [I2cOperation<'_>],
        ) -> Result<(), Self::Error> {
            let mut frame = Vec::new();
            for op in operations {
                if let I2cOperation::Write(bytes) = op {
                    frame.extend_from_slice(bytes);
                }
            }
            self.frames.push((address, frame));
            Ok(())
        }
    }

    #[test]
    fn test_spi_command_drives_dc_low() {
        let mut interface = SpiInterface::new(MockSpi::default(), MockPin::default(), MockPin::default());
        interface.send_command(0xAF).unwrap();
        let (spi, dc, _) = interface.release();
        assert_eq!(dc.high, Some(false));
        assert_eq!(spi.writes, alloc::vec![alloc::vec![0xAF]]);
    }

    #[test]
    fn test_spi_data_drives_dc_high() {
        let mut interface = SpiInterface::new(MockSpi::default(), MockPin::default(), MockPin::default());
        interface.send_data(&[1, 2, 3]).unwrap();
        let (spi, dc, _) = interface.release();
        assert_eq!(dc.high, Some(true));
        assert_eq!(spi.writes, alloc::vec![alloc::vec![1, 2, 3]]);
    }

    #[test]
    fn test_spi_reset_is_active_low() {
        let mut interface = SpiInterface::new(MockSpi::default(), MockPin::default(), MockPin::default());
        interface.set_reset(true).unwrap();
        let (spi, dc, rst) = interface.release();
        assert_eq!(rst.high, Some(false));

        let mut interface = SpiInterface::new(spi, dc, rst);
        interface.set_reset(false).unwrap();
        let (_, _, rst) = interface.release();
        assert_eq!(rst.high, Some(true));
    }

    #[test]
    fn test_spi_bus_failure_is_reported() {
        let spi = MockSpi {
            fail: true,
            ..MockSpi::default()
        };
        let mut interface = SpiInterface::new(spi, MockPin::default(), MockPin::default());
        assert!(matches!(
            interface.send_command(0xAE),
            Err(InterfaceError::Bus(MockError))
        ));
    }

    #[test]
    fn test_i2c_control_bytes() {
        let mut interface = I2cInterface::new(MockI2c::default());
        assert_eq!(interface.address(), DEFAULT_I2C_ADDRESS);
        interface.send_command(0xAE).unwrap();
        interface.send_data(&[0xAA, 0x55]).unwrap();
        interface.set_reset(true).unwrap();

        let i2c = interface.release();
        assert_eq!(
            i2c.frames,
            alloc::vec![
                (0x3C, alloc::vec![0x00, 0xAE]),
                (0x3C, alloc::vec![0x40, 0xAA, 0x55]),
            ]
        );
    }

    #[test]
    fn test_i2c_custom_address() {
        let mut interface = I2cInterface::with_address(MockI2c::default(), 0x3D);
        interface.send_command(0xAF).unwrap();
        let i2c = interface.release();
        assert_eq!(i2c.frames[0].0, 0x3D);
    }
}
