#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

macro_rules! with_context {
	(( $fmt:tt $($t:tt)* ), $e:expr) => {{
		use failure::Error;

		match (|| { $e })() {
			Ok(v) => Ok(v),
			Err(e) => {
				let e: Error = e;
				let msg = format!(concat!($fmt, ": {}") $($t)*, e);
				Err(Error::from(e.context(msg)))
			}
		}
	}};

	($msg:expr, $e:expr) => {
		with_context!(("{}", $msg), $e)
	};
}

pub type AResult<T> = Result<T, failure::Error>;

pub mod i2c;
pub mod rda5807;

/// Run one tuner command as a single bus transaction on the device node at
/// `path`.
///
/// The node is opened and bound to the tuner's slave address, `f` performs
/// exactly one read or write, and the handle is closed again even when `f`
/// fails.
pub fn with_tuner<F, R>(path: &str, f: F) -> AResult<R>
where
	F: FnOnce(&mut i2c::Device) -> Result<R, i2c::I2cError>,
{
	Ok(i2c::transaction(|| i2c::open(path, rda5807::SLAVE_ADDRESS), f)?)
}
