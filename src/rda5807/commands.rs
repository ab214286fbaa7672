use crate::i2c::{
	I2cBus,
	I2cError,
};

/// Control commands, each one a fixed literal frame written starting at
/// register 0x02.
///
/// Frames overwrite the target registers wholesale; the original tool never
/// did read-modify-write and the chip behavior depends on these exact
/// patterns, so neither do we.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
	PowerOn,
	PowerOff,
	SeekUp,
	SeekDown,
}

// register 0x02 high byte: audio output + mute disable, plus the seek
// enable/direction bits; low byte bit 0 powers the chip. PowerOn also
// presets registers 0x03..=0x05 (channel, band/spacing, volume).
const POWER_ON: [u8; 8] = [
	0b1100_0000, 0b0000_0001, // 0x02
	0b0000_0000, 0b0000_0000, // 0x03
	0b0000_0000, 0b0000_0000, // 0x04
	0b0000_0100, 0b0111_0111, // 0x05
];

const POWER_OFF: [u8; 2] = [
	0b1100_0000, 0b0000_0000, // 0x02
];

const SEEK_UP: [u8; 2] = [
	0b1100_0011, 0b0000_0001, // 0x02
];

const SEEK_DOWN: [u8; 2] = [
	0b1100_0001, 0b0000_0001, // 0x02
];

impl Command {
	pub fn frame(self) -> &'static [u8] {
		match self {
			Command::PowerOn => &POWER_ON,
			Command::PowerOff => &POWER_OFF,
			Command::SeekUp => &SEEK_UP,
			Command::SeekDown => &SEEK_DOWN,
		}
	}
}

pub fn send_command<B: I2cBus>(bus: &mut B, command: Command) -> Result<(), I2cError> {
	debug!("sending {:?}: {:02x?}", command, command.frame());
	bus.write_frame(command.frame())
}
