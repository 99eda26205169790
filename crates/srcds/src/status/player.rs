//! Rows of the player table.

use super::{Column, ParseStatusError};

/// Value of the [`Column::Kind`] column for bots.
const BOT_MARKER: &str = "BOT";

/// A human player listed in the `status` output.
///
/// Every field is taken verbatim from its column, except for [`ping`] and [`loss`], which are
/// parsed as integers.
///
/// [`ping`]: Player::ping
/// [`loss`]: Player::loss
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Player
{
	/// The player's user ID.
	pub user_id: String,

	/// The player's name.
	pub name: String,

	/// The player's unique (Steam) ID.
	pub unique_id: String,

	/// How long the player has been connected, e.g. `01:23`.
	pub time_connected: String,

	/// The player's latency.
	pub ping: i32,

	/// The player's packet loss.
	pub loss: i32,

	/// The player's connection state, e.g. `active` or `spawning`.
	pub state: String,

	/// The player's network rate.
	pub rate: String,

	/// The player's IP address and port.
	pub address: String,
}

impl Player
{
	/// Parses a single row of the player table.
	///
	/// `row` is only used for error reporting. Rows belonging to bots yield [`None`].
	pub fn parse_row(row: usize, line: &str) -> Result<Option<Self>, ParseStatusError>
	{
		let row = Row { number: row, columns: line.split(' ').collect() };

		if row.get(Column::Kind)? == BOT_MARKER {
			return Ok(None);
		}

		Ok(Some(Self {
			user_id: row.get_owned(Column::UserId)?,
			name: row.get_owned(Column::Name)?,
			unique_id: row.get_owned(Column::UniqueId)?,
			time_connected: row.get_owned(Column::TimeConnected)?,
			ping: row.get_number(Column::Ping)?,
			loss: row.get_number(Column::Loss)?,
			state: row.get_owned(Column::State)?,
			rate: row.get_owned(Column::Rate)?,
			address: row.get_owned(Column::Address)?,
		}))
	}
}

/// A row split into its columns.
struct Row<'a>
{
	/// Index of the row in the table.
	number: usize,

	/// The space-separated columns.
	columns: Vec<&'a str>,
}

impl<'a> Row<'a>
{
	/// Returns the value of `column`.
	fn get(&self, column: Column) -> Result<&'a str, ParseStatusError>
	{
		self.columns
			.get(column.index())
			.copied()
			.ok_or(ParseStatusError::MissingColumn { row: self.number, column })
	}

	/// Returns an owned copy of the value of `column`.
	fn get_owned(&self, column: Column) -> Result<String, ParseStatusError>
	{
		self.get(column).map(str::to_owned)
	}

	/// Parses the value of `column` as an integer.
	fn get_number(&self, column: Column) -> Result<i32, ParseStatusError>
	{
		let value = self.get(column)?;

		value
			.parse::<i32>()
			.map_err(|source| ParseStatusError::InvalidColumn {
				row: self.number,
				column,
				actual: value.to_owned(),
				source,
			})
	}
}
