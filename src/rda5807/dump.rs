use std::io::{
	self,
	Write,
};

use crate::i2c::{
	I2cBus,
	I2cError,
};

use super::{
	ADDRESS_WRAP,
	SNAPSHOT_LEN,
};

/// Read the full register snapshot in one transfer.
///
/// The read starts at register 0x0a and the register pointer wraps after
/// 0x3f, so bytes 108.. of the snapshot are registers 0x00.. again.
pub fn read_registers<B: I2cBus>(bus: &mut B) -> Result<[u8; SNAPSHOT_LEN], I2cError> {
	let mut frame = [0u8; SNAPSHOT_LEN];
	bus.read_frame(&mut frame)?;
	Ok(frame)
}

/// Print one line per register pair: hex address (wrapping at 0x40), both
/// bytes in hex, both bytes as fixed-width 8-bit binary, MSB first.
pub fn print_registers<W: Write>(out: &mut W, frame: &[u8], start_address: u8) -> io::Result<()> {
	let mut address = start_address;
	for pair in frame.chunks_exact(2) {
		writeln!(
			out,
			" {:2X} {:2X} {:2X} {:08b} {:08b}",
			address, pair[0], pair[1], pair[0], pair[1],
		)?;
		address = address.wrapping_add(1);
		if address >= ADDRESS_WRAP {
			address = 0x00;
		}
	}
	Ok(())
}

/// Curated view: the control registers 0x00..=0x05, the status pair at
/// 0x0a/0x0b and the chip id register 0x10.
pub fn show_registers<W: Write>(out: &mut W, snapshot: &[u8; SNAPSHOT_LEN]) -> crate::AResult<()> {
	with_context!("couldn't print registers", {
		print_registers(out, &snapshot[108..120], 0x00)?;
		print_registers(out, &snapshot[0..4], 0x0a)?;
		print_registers(out, &snapshot[12..14], 0x10)?;
		Ok(())
	})
}

/// Full view: every register of the snapshot, in address order.
pub fn show_all_registers<W: Write>(out: &mut W, snapshot: &[u8; SNAPSHOT_LEN]) -> crate::AResult<()> {
	with_context!("couldn't print registers", {
		print_registers(out, &snapshot[108..128], 0x00)?;
		print_registers(out, &snapshot[0..108], 0x0a)?;
		Ok(())
	})
}
