//! Error types used by the [`status`] module.
//!
//! [`status`]: crate::status

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Errors returned from [`Status::parse()`].
///
/// The `status` output is parsed strictly by position, so any deviation from the expected
/// layout is reported instead of being skipped over.
///
/// [`Status::parse()`]: super::Status::parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStatusError
{
	/// The output ended before all the header lines and the player table were seen.
	#[error("expected at least {expected} lines of output but got {actual}")]
	MissingLines
	{
		/// How many newline-separated segments are required.
		expected: usize,

		/// How many segments the output actually had.
		actual: usize,
	},

	/// A header line did not have the `<label>: <value>` shape.
	#[error("{field} line has no `: ` separator: {line:?}")]
	MissingSeparator
	{
		/// The header field we were trying to read.
		field: Field,

		/// The offending line.
		line: String,
	},

	/// The players summary line ended early.
	#[error("players line has no {count} count")]
	MissingPlayerCount
	{
		/// The count that was missing.
		count: PlayerCount,
	},

	/// A player count in the summary line was not a number.
	#[error("{count} count should be a number but is `{actual}`")]
	InvalidPlayerCount
	{
		/// The count that failed to parse.
		count: PlayerCount,

		/// The raw token.
		actual: String,

		/// The underlying integer parsing error.
		#[source]
		source: ParseIntError,
	},

	/// A row in the player table had fewer columns than expected.
	#[error("player row {row} has no `{column}` column")]
	MissingColumn
	{
		/// Index of the row, counting the column header as row 0.
		row: usize,

		/// The first column we failed to find.
		column: Column,
	},

	/// A numeric column in the player table was not a number.
	#[error("`{column}` column of player row {row} should be a number but is `{actual}`")]
	InvalidColumn
	{
		/// Index of the row, counting the column header as row 0.
		row: usize,

		/// The column that failed to parse.
		column: Column,

		/// The raw value.
		actual: String,

		/// The underlying integer parsing error.
		#[source]
		source: ParseIntError,
	},
}

/// The header fields we extract from the `status` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field
{
	/// `hostname: …`
	Hostname,

	/// `version : …`
	Version,

	/// `map     : …`
	Map,

	/// `players : …`
	Players,
}

impl Field
{
	/// Returns the (0-based) line this field lives on.
	pub const fn line(self) -> usize
	{
		match self {
			Self::Hostname => 0,
			Self::Version => 1,
			Self::Map => 5,
			Self::Players => 6,
		}
	}
}

impl fmt::Display for Field
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(match self {
			Self::Hostname => "hostname",
			Self::Version => "version",
			Self::Map => "map",
			Self::Players => "players",
		})
	}
}

/// The two counts in the `<humans> humans, <bots> bots` summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCount
{
	/// The first token.
	Humans,

	/// The third token.
	Bots,
}

impl fmt::Display for PlayerCount
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(match self {
			Self::Humans => "human",
			Self::Bots => "bot",
		})
	}
}

/// The columns of the player table, in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column
{
	/// The leading `#`.
	Marker,

	/// The player's user ID.
	UserId,

	/// Contains `BOT` for bots.
	Kind,

	/// The player's name.
	Name,

	/// The player's unique (Steam) ID.
	UniqueId,

	/// How long the player has been connected.
	TimeConnected,

	/// The player's latency.
	Ping,

	/// The player's packet loss.
	Loss,

	/// The player's connection state.
	State,

	/// The player's network rate.
	Rate,

	/// The player's IP address and port.
	Address,
}

impl Column
{
	/// Returns the (0-based) index of this column.
	pub const fn index(self) -> usize
	{
		self as usize
	}
}

impl fmt::Display for Column
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(match self {
			Self::Marker => "#",
			Self::UserId => "userid",
			Self::Kind => "kind",
			Self::Name => "name",
			Self::UniqueId => "uniqueid",
			Self::TimeConnected => "connected",
			Self::Ping => "ping",
			Self::Loss => "loss",
			Self::State => "state",
			Self::Rate => "rate",
			Self::Address => "adr",
		})
	}
}
