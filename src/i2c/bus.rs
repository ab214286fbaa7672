use std::io;

/// Transport failures, one variant per bus operation.
///
/// Every variant names the operation that failed and keeps the underlying OS
/// error; a short transfer is reported through the same Read/Write variants
/// (there is no partial-success path).
#[derive(Debug, Fail)]
pub enum I2cError {
	#[fail(display = "unable to open i2c dev file {}: {}", path, cause)]
	Open {
		path: String,
		#[fail(cause)]
		cause: io::Error,
	},
	#[fail(display = "unable to set slave address 0x{:02x}: {}", address, cause)]
	AddressBind {
		address: u16,
		#[fail(cause)]
		cause: io::Error,
	},
	#[fail(display = "unable to read in i2c: {}", cause)]
	Read {
		#[fail(cause)]
		cause: io::Error,
	},
	#[fail(display = "unable to write in i2c: {}", cause)]
	Write {
		#[fail(cause)]
		cause: io::Error,
	},
	#[fail(display = "unable to close i2c dev file: {}", cause)]
	Close {
		#[fail(cause)]
		cause: io::Error,
	},
}

/// One open bus connection, already bound to a single slave address.
///
/// A handle belongs to exactly one transaction: it is obtained from an open
/// call, used for one read or write, and consumed by `close`. Handles are
/// never shared between commands.
pub trait I2cBus {
	/// Blocking read filling `frame` completely; a short read is a
	/// `ReadError`, not a partial result.
	fn read_frame(&mut self, frame: &mut [u8]) -> Result<(), I2cError>;

	/// Blocking write of the whole `frame`; a short write is a `WriteError`.
	fn write_frame(&mut self, frame: &[u8]) -> Result<(), I2cError>;

	/// Release the handle. A close failure is reported but doesn't undo an
	/// already completed transfer.
	fn close(self) -> Result<(), I2cError>;
}

/// Wrap one bus operation in the open → read-or-write → close discipline.
///
/// If `open` fails the command aborts right away and `f` never runs. If `f`
/// fails the handle is still closed; the error from `f` wins over a close
/// error since it describes the failed transfer.
pub fn transaction<B, O, F, R>(open: O, f: F) -> Result<R, I2cError>
where
	B: I2cBus,
	O: FnOnce() -> Result<B, I2cError>,
	F: FnOnce(&mut B) -> Result<R, I2cError>,
{
	let mut bus = open()?;
	let result = f(&mut bus);
	let closed = bus.close();
	let value = result?;
	closed?;
	Ok(value)
}

#[cfg(test)]
pub(crate) mod mock {
	use super::{
		I2cBus,
		I2cError,
	};

	use std::cell::RefCell;
	use std::io;
	use std::rc::Rc;

	#[derive(Clone, Copy, PartialEq, Eq, Debug)]
	pub enum Call {
		Read(usize),
		Write(usize),
		Close,
	}

	/// In-memory bus: serves one canned response per read, records every
	/// written frame, and logs the call sequence for discipline checks.
	pub struct MockBus {
		pub responses: Vec<Vec<u8>>,
		pub written: Rc<RefCell<Vec<Vec<u8>>>>,
		pub calls: Rc<RefCell<Vec<Call>>>,
		pub fail_close: bool,
	}

	impl MockBus {
		pub fn with_response(response: &[u8]) -> MockBus {
			MockBus {
				responses: vec![response.to_vec()],
				written: Rc::new(RefCell::new(Vec::new())),
				calls: Rc::new(RefCell::new(Vec::new())),
				fail_close: false,
			}
		}

		pub fn recording() -> MockBus {
			MockBus {
				responses: Vec::new(),
				written: Rc::new(RefCell::new(Vec::new())),
				calls: Rc::new(RefCell::new(Vec::new())),
				fail_close: false,
			}
		}
	}

	impl I2cBus for MockBus {
		fn read_frame(&mut self, frame: &mut [u8]) -> Result<(), I2cError> {
			self.calls.borrow_mut().push(Call::Read(frame.len()));
			if self.responses.is_empty() {
				return Err(I2cError::Read {
					cause: io::Error::new(io::ErrorKind::UnexpectedEof, "no canned response"),
				});
			}
			let response = self.responses.remove(0);
			assert_eq!(frame.len(), response.len(), "canned response length mismatch");
			frame.copy_from_slice(&response);
			Ok(())
		}

		fn write_frame(&mut self, frame: &[u8]) -> Result<(), I2cError> {
			self.calls.borrow_mut().push(Call::Write(frame.len()));
			self.written.borrow_mut().push(frame.to_vec());
			Ok(())
		}

		fn close(self) -> Result<(), I2cError> {
			self.calls.borrow_mut().push(Call::Close);
			if self.fail_close {
				return Err(I2cError::Close {
					cause: io::Error::new(io::ErrorKind::Other, "mock close failure"),
				});
			}
			Ok(())
		}
	}
}
