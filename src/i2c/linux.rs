use std::fs;
use std::io::{
	self,
	Read,
	Write,
};
use std::os::unix::io::{
	AsRawFd,
	IntoRawFd,
};

use libc::{
	c_ulong,
	close,
	ioctl,
};

use super::bus::{
	I2cBus,
	I2cError,
};

/* from <linux/i2c-dev.h> */
const I2C_SLAVE: c_ulong = 0x0703;

/// Open handle on an i2c-dev node, bound to a single slave address.
pub struct Device {
	file: fs::File,
}

pub fn inner_open(path: &str, address: u16) -> Result<Device, I2cError> {
	let file = fs::OpenOptions::new()
		.read(true)
		.write(true)
		.open(path)
		.map_err(|cause| I2cError::Open {
			path: path.into(),
			cause,
		})?;

	// after this every plain read()/write() on the fd targets `address`
	if unsafe { ioctl(file.as_raw_fd(), I2C_SLAVE, c_ulong::from(address)) } < 0 {
		return Err(I2cError::AddressBind {
			address,
			cause: io::Error::last_os_error(),
		});
	}
	debug!("opened {} for slave address 0x{:02x}", path, address);

	Ok(Device {
		file,
	})
}

#[cfg(test)]
fn from_file(file: fs::File) -> Device {
	Device {
		file,
	}
}

impl I2cBus for Device {
	fn read_frame(&mut self, frame: &mut [u8]) -> Result<(), I2cError> {
		// the chip streams register contents in a single transfer; a short
		// read means the transfer failed
		let l = self.file.read(frame).map_err(|cause| I2cError::Read {
			cause,
		})?;
		if l != frame.len() {
			return Err(I2cError::Read {
				cause: io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer"),
			});
		}
		Ok(())
	}

	fn write_frame(&mut self, frame: &[u8]) -> Result<(), I2cError> {
		let l = self.file.write(frame).map_err(|cause| I2cError::Write {
			cause,
		})?;
		if l != frame.len() {
			return Err(I2cError::Write {
				cause: io::Error::new(io::ErrorKind::Other, "failed to write whole buffer"),
			});
		}
		Ok(())
	}

	fn close(self) -> Result<(), I2cError> {
		let fd = self.file.into_raw_fd();
		if unsafe { close(fd) } < 0 {
			return Err(I2cError::Close {
				cause: io::Error::last_os_error(),
			});
		}
		Ok(())
	}
}
