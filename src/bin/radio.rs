#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

extern crate dingux_radio;
use dingux_radio::*;

use std::io;
use std::process::exit;

use dingux_radio::rda5807::Command;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum RadioCommand {
	Start,
	Stop,
	SeekUp,
	SeekDown,
	Status,
	Register,
	RegisterAll,
}

const FLAGS: [(&str, RadioCommand); 7] = [
	("start", RadioCommand::Start),
	("stop", RadioCommand::Stop),
	("seekup", RadioCommand::SeekUp),
	("seekdown", RadioCommand::SeekDown),
	("status", RadioCommand::Status),
	("register", RadioCommand::Register),
	("registerall", RadioCommand::RegisterAll),
];

fn run_command(bus_path: &str, command: RadioCommand) -> AResult<()> {
	match command {
		RadioCommand::Start => with_tuner(bus_path, |bus| rda5807::send_command(bus, Command::PowerOn)),
		RadioCommand::Stop => with_tuner(bus_path, |bus| rda5807::send_command(bus, Command::PowerOff)),
		RadioCommand::SeekUp => with_tuner(bus_path, |bus| rda5807::send_command(bus, Command::SeekUp)),
		RadioCommand::SeekDown => with_tuner(bus_path, |bus| rda5807::send_command(bus, Command::SeekDown)),
		RadioCommand::Status => {
			let (status, frequency) = with_tuner(bus_path, |bus| rda5807::read_status(bus))?;
			println!("{}", rda5807::status_line(status, frequency));
			Ok(())
		}
		RadioCommand::Register => {
			let snapshot = with_tuner(bus_path, |bus| rda5807::read_registers(bus))?;
			rda5807::show_registers(&mut io::stdout(), &snapshot)
		}
		RadioCommand::RegisterAll => {
			let snapshot = with_tuner(bus_path, |bus| rda5807::read_registers(bus))?;
			rda5807::show_all_registers(&mut io::stdout(), &snapshot)
		}
	}
}

fn main_app() -> AResult<()> {
	let mut app = clap_app!(@app (app_from_crate!())
		(@arg bus: -b --bus +takes_value "i2c device node of the FM chip (default /dev/i2c-0)")
		(@arg start: --start ... "enable FM chip")
		(@arg stop: --stop ... "disable FM chip")
		(@arg seekup: --seekup ... "seek up")
		(@arg seekdown: --seekdown ... "seek down")
		(@arg status: --status ... "show FM chip status")
		(@arg register: --register ... "show registers of FM chip")
		(@arg registerall: --registerall ... "show all registers of FM chip")
	);
	let matches = app.clone().get_matches();
	let bus_path = matches.value_of("bus").unwrap_or("/dev/i2c-0");

	// flags may be given several times and run in command-line order, one
	// bus transaction each
	let mut queue = Vec::new();
	for &(name, command) in &FLAGS {
		if let Some(indices) = matches.indices_of(name) {
			for index in indices {
				queue.push((index, name, command));
			}
		}
	}
	queue.sort_by_key(|&(index, _, _)| index);

	if queue.is_empty() {
		app.print_long_help()?;
		println!();
		return Ok(());
	}

	for (_, name, command) in queue {
		// a failed transaction doesn't stop the remaining commands
		if let Err(e) = run_command(bus_path, command) {
			error!("--{}: {}", name, e);
		}
	}

	Ok(())
}

fn main() {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = main_app() {
		error!("Error: {}", e);
		exit(1);
	}
}
