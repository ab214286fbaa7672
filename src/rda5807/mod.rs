/// Protocol for an RDA5807-family FM tuner behind an i2c-dev node.
///
/// The chip has no register-address phase in its plain i2c protocol:
/// sequential writes always start at the control register 0x02 and
/// sequential reads always start at the status register 0x0a, with the
/// register pointer wrapping after 0x3f. So a command is "write this literal
/// frame", and status is "read two bytes".
///
/// Registers are 16 bit wide and transferred big-endian, which is why all
/// frames come in byte pairs.

mod commands;
mod dump;
mod status;

pub use self::commands::{
	Command,
	send_command,
};

pub use self::status::{
	Frequency,
	SeekStatus,
	decode_frequency,
	decode_seek_status,
	read_status,
	status_line,
};

pub use self::dump::{
	print_registers,
	read_registers,
	show_all_registers,
	show_registers,
};

/// Fixed 7-bit bus address of the tuner.
pub const SLAVE_ADDRESS: u16 = 0x10;

/// Size of the full register snapshot a dump reads.
pub const SNAPSHOT_LEN: usize = 128;

/// The register pointer (and therefore the dump address column) wraps here.
pub const ADDRESS_WRAP: u8 = 0x40;

/// First register of a sequential write: the primary control register.
pub const WRITE_BASE_REGISTER: u8 = 0x02;

/// First register of a sequential read: seek flags and current channel.
pub const READ_BASE_REGISTER: u8 = 0x0a;
