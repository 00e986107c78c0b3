use std::borrow::Borrow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Named bits of a message's flag field.
///
/// The catalogue only covers flags known to this build. [`MessageFlag::from_bitfield`] drops any
/// other bit, so re-encoding a decoded set is lossy for unrecognised bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageFlag {
    /// Published to subscribed channels.
    Crossposted,
    /// Originated from a message in another channel.
    IsCrosspost,
    EmbedsSuppressed,
    /// The source of this crosspost was deleted.
    SourceMessageDeleted,
    Urgent,
    /// Only visible to the interacting user.
    Ephemeral,
    /// Interaction response still being prepared.
    Loading,
    NotificationsSuppressed,
    IsVoiceMessage,
    /// Uses the extended component system; selects [`ValidationMode::Extended`](crate::ValidationMode::Extended).
    IsComponentsV2,
}

impl MessageFlag {
    pub const ALL: [MessageFlag; 10] = [
        MessageFlag::Crossposted,
        MessageFlag::IsCrosspost,
        MessageFlag::EmbedsSuppressed,
        MessageFlag::SourceMessageDeleted,
        MessageFlag::Urgent,
        MessageFlag::Ephemeral,
        MessageFlag::Loading,
        MessageFlag::NotificationsSuppressed,
        MessageFlag::IsVoiceMessage,
        MessageFlag::IsComponentsV2,
    ];

    pub fn offset(self) -> u32 {
        match self {
            MessageFlag::Crossposted => 0,
            MessageFlag::IsCrosspost => 1,
            MessageFlag::EmbedsSuppressed => 2,
            MessageFlag::SourceMessageDeleted => 3,
            MessageFlag::Urgent => 4,
            MessageFlag::Ephemeral => 6,
            MessageFlag::Loading => 7,
            MessageFlag::NotificationsSuppressed => 12,
            MessageFlag::IsVoiceMessage => 13,
            MessageFlag::IsComponentsV2 => 15,
        }
    }

    /// The single bit this flag occupies.
    pub fn value(self) -> u64 {
        1 << self.offset()
    }

    /// Bits covered by the catalogue.
    pub fn known_bits() -> u64 {
        Self::to_bitfield(Self::ALL)
    }

    /// Every catalogued flag whose bit is set. Unknown bits are ignored.
    pub fn from_bitfield(bitfield: u64) -> BTreeSet<MessageFlag> {
        Self::ALL
            .into_iter()
            .filter(|flag| bitfield & flag.value() != 0)
            .collect()
    }

    pub fn to_bitfield<I>(flags: I) -> u64
    where
        I: IntoIterator,
        I::Item: Borrow<MessageFlag>,
    {
        flags
            .into_iter()
            .fold(0, |bits, flag| bits | flag.borrow().value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_single_bits() {
        for flag in MessageFlag::ALL {
            assert_eq!(flag.value().count_ones(), 1, "{flag:?}");
        }
        assert_eq!(MessageFlag::Ephemeral.value(), 64);
        assert_eq!(MessageFlag::IsComponentsV2.value(), 32768);
    }

    #[test]
    fn decode_drops_unknown_bits() {
        let bits = MessageFlag::Ephemeral.value() | (1 << 5) | (1 << 40);
        let flags = MessageFlag::from_bitfield(bits);
        assert_eq!(flags, BTreeSet::from([MessageFlag::Ephemeral]));
        assert_eq!(MessageFlag::to_bitfield(&flags), MessageFlag::Ephemeral.value());
    }

    #[test]
    fn encode_ors_members() {
        let bits = MessageFlag::to_bitfield([MessageFlag::Crossposted, MessageFlag::Urgent]);
        assert_eq!(bits, 0b1_0001);
        assert_eq!(MessageFlag::to_bitfield(Vec::<MessageFlag>::new()), 0);
    }

    #[test]
    fn known_bits_round_trip() {
        let all = MessageFlag::known_bits();
        assert_eq!(MessageFlag::from_bitfield(all).len(), MessageFlag::ALL.len());
        assert_eq!(MessageFlag::to_bitfield(MessageFlag::from_bitfield(all)), all);
    }

    #[test]
    fn serializes_by_name() {
        let json = serde_json::to_string(&MessageFlag::IsComponentsV2).unwrap();
        assert_eq!(json, "\"IS_COMPONENTS_V2\"");
    }
}
