mod bus;
mod linux;

pub use self::bus::{
	I2cBus,
	I2cError,
	transaction,
};

#[cfg(test)]
pub(crate) use self::bus::mock;

// OS-specific. for now linux only.
pub use self::linux::Device;

pub fn open(path: &str, address: u16) -> Result<Device, I2cError> {
	linux::inner_open(path, address)
}
