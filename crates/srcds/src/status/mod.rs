//! Parsing the output of the `status` console command.
//!
//! The output has a fixed layout: seven header lines, a blank line, and a table with one row
//! per connected client, terminated by `#end`.
//!
//! ```text
//! hostname: Alpha's KZ
//! version : 1.40.2.1/14021 10064/8853 secure  [G:1:4132457]
//! udp/ip  : 0.0.0.0:27015  (public ip: 203.0.113.7)
//! os      :  Linux
//! type    :  community dedicated
//! map     : kz_grotto
//! players : 1 humans, 1 bots (16/0 max) (not hibernating)
//!
//! # userid name uniqueid connected ping loss state rate adr
//! # 2 BOT kzbot BOT 00:00 0 0 active 0 loopback
//! # 3 4 alice STEAM_1:0:1234 01:23 45 0 active 786432 203.0.113.8:27005
//! #end
//! ```
//!
//! Only the hostname, version, map and players lines are read from the header. Table rows are
//! split on single spaces; see [`Column`] for the column layout.

use std::str::FromStr;

mod errors;
pub use errors::{Column, Field, ParseStatusError, PlayerCount};

mod player;
pub use player::Player;

cfg_serde! {
	mod serde;
}

/// The number of newline-separated segments the output is split into.
///
/// The last segment holds the entire player table.
const SEGMENTS: usize = 8;

/// Index of the segment holding the player table.
const TABLE: usize = SEGMENTS - 1;

/// Terminates the player table.
const TABLE_END: &str = "\n#end\n";

/// The parsed output of the `status` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status
{
	/// The server's hostname.
	pub hostname: String,

	/// The game version the server is running.
	pub version: String,

	/// The map currently being played.
	pub map: String,

	/// How many humans are connected, according to the summary line.
	pub human_players: u32,

	/// How many bots are connected, according to the summary line.
	pub bot_players: u32,

	/// Every connected human, in the order the server listed them.
	///
	/// Bots are not included here, but they are counted in [`bot_players`].
	///
	/// [`bot_players`]: Status::bot_players
	pub players: Vec<Player>,
}

impl Status
{
	/// Parses the raw output of the `status` command.
	///
	/// Parsing is strict: a missing line, a missing `: ` separator, a missing column or a
	/// non-numeric count is an error.
	pub fn parse(raw: &str) -> Result<Self, ParseStatusError>
	{
		let segments = split_segments(raw)?;
		let hostname = field_value(&segments, Field::Hostname)?;
		let version = field_value(&segments, Field::Version)?;
		let map = field_value(&segments, Field::Map)?;
		let (human_players, bot_players) =
			parse_player_counts(field_value(&segments, Field::Players)?)?;
		let players = parse_player_table(segments[TABLE])?;

		Ok(Self {
			hostname: hostname.to_owned(),
			version: version.to_owned(),
			map: map.to_owned(),
			human_players,
			bot_players,
			players,
		})
	}
}

impl FromStr for Status
{
	type Err = ParseStatusError;

	fn from_str(raw: &str) -> Result<Self, Self::Err>
	{
		Self::parse(raw)
	}
}

/// Splits `raw` into exactly [`SEGMENTS`] segments.
fn split_segments(raw: &str) -> Result<[&str; SEGMENTS], ParseStatusError>
{
	let mut segments = [""; SEGMENTS];
	let mut lines = raw.splitn(SEGMENTS, '\n');

	for (idx, segment) in segments.iter_mut().enumerate() {
		*segment = lines
			.next()
			.ok_or(ParseStatusError::MissingLines { expected: SEGMENTS, actual: idx })?;
	}

	Ok(segments)
}

/// Extracts the `<value>` from a `<label>: <value>` header line.
fn field_value<'a>(segments: &[&'a str; SEGMENTS], field: Field)
-> Result<&'a str, ParseStatusError>
{
	let line = segments[field.line()];

	line.split_once(": ")
		.map(|(_, value)| value)
		.ok_or_else(|| ParseStatusError::MissingSeparator { field, line: line.to_owned() })
}

/// Parses the `<humans> humans, <bots> bots …` summary line.
fn parse_player_counts(summary: &str) -> Result<(u32, u32), ParseStatusError>
{
	let mut tokens = summary.splitn(4, ' ');
	let humans = tokens
		.next()
		.ok_or(ParseStatusError::MissingPlayerCount { count: PlayerCount::Humans })?;
	let bots = tokens
		.nth(1)
		.ok_or(ParseStatusError::MissingPlayerCount { count: PlayerCount::Bots })?;

	Ok((parse_count(humans, PlayerCount::Humans)?, parse_count(bots, PlayerCount::Bots)?))
}

/// Parses a single token of the summary line.
fn parse_count(token: &str, count: PlayerCount) -> Result<u32, ParseStatusError>
{
	token
		.parse::<u32>()
		.map_err(|source| ParseStatusError::InvalidPlayerCount {
			count,
			actual: token.to_owned(),
			source,
		})
}

/// Parses the player table, skipping its column header and any bots.
fn parse_player_table(table: &str) -> Result<Vec<Player>, ParseStatusError>
{
	let table = table.strip_suffix(TABLE_END).unwrap_or(table);
	let table = table.strip_prefix('\n').unwrap_or(table);

	table
		.split('\n')
		.enumerate()
		.skip(1)
		.filter_map(|(row, line)| Player::parse_row(row, line).transpose())
		.collect()
}
