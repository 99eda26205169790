//! Trait implementations for the [`serde`] crate.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Player, Status};

impl Serialize for Status
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		#[derive(serde::Serialize)]
		struct Players<'a>
		{
			human_players: u32,
			bot_players: u32,
			players: &'a [Player],
		}

		let players = Players {
			human_players: self.human_players,
			bot_players: self.bot_players,
			players: &self.players,
		};

		let mut serializer = serializer.serialize_struct("Status", 4)?;
		serializer.serialize_field("hostname", &self.hostname)?;
		serializer.serialize_field("version", &self.version)?;
		serializer.serialize_field("map", &self.map)?;
		serializer.serialize_field("players", &players)?;
		serializer.end()
	}
}
