//! Typed component variants, the slots they may occupy, and the tagged union tying them together.
//!
//! Slot membership is a static property of each variant: the marker traits below are implemented
//! once per variant, and [`ComponentType::slots`] mirrors the same table for components that only
//! exist as parsed data. [`UnknownComponent`] is a member of every slot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ComponentError;

mod content;
mod interactive;
mod layout;
mod unknown;

pub use content::{FileDisplay, MediaGallery, MediaItem, TextDisplay, Thumbnail, UnfurledMedia};
pub use interactive::{
    Button, ButtonStyle, EntitySelect, EntityTarget, SelectOption, StringSelect, TextInput,
    TextInputStyle,
};
pub use layout::{ActionRow, Container, Section, Separator, Spacing};
pub use unknown::UnknownComponent;

/// Discriminant of a component as assigned by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentType {
    ActionRow,
    Button,
    StringSelect,
    TextInput,
    UserSelect,
    RoleSelect,
    MentionableSelect,
    ChannelSelect,
    Section,
    TextDisplay,
    Thumbnail,
    MediaGallery,
    FileDisplay,
    Separator,
    Container,
    /// A discriminant this build does not know about; carries the raw key.
    Unknown(i64),
}

impl ComponentType {
    /// Every known discriminant, in key order.
    pub const KNOWN: [ComponentType; 15] = [
        ComponentType::ActionRow,
        ComponentType::Button,
        ComponentType::StringSelect,
        ComponentType::TextInput,
        ComponentType::UserSelect,
        ComponentType::RoleSelect,
        ComponentType::MentionableSelect,
        ComponentType::ChannelSelect,
        ComponentType::Section,
        ComponentType::TextDisplay,
        ComponentType::Thumbnail,
        ComponentType::MediaGallery,
        ComponentType::FileDisplay,
        ComponentType::Separator,
        ComponentType::Container,
    ];

    pub fn from_key(key: i64) -> Self {
        match key {
            1 => ComponentType::ActionRow,
            2 => ComponentType::Button,
            3 => ComponentType::StringSelect,
            4 => ComponentType::TextInput,
            5 => ComponentType::UserSelect,
            6 => ComponentType::RoleSelect,
            7 => ComponentType::MentionableSelect,
            8 => ComponentType::ChannelSelect,
            9 => ComponentType::Section,
            10 => ComponentType::TextDisplay,
            11 => ComponentType::Thumbnail,
            12 => ComponentType::MediaGallery,
            13 => ComponentType::FileDisplay,
            14 => ComponentType::Separator,
            17 => ComponentType::Container,
            other => ComponentType::Unknown(other),
        }
    }

    pub fn key(self) -> i64 {
        match self {
            ComponentType::ActionRow => 1,
            ComponentType::Button => 2,
            ComponentType::StringSelect => 3,
            ComponentType::TextInput => 4,
            ComponentType::UserSelect => 5,
            ComponentType::RoleSelect => 6,
            ComponentType::MentionableSelect => 7,
            ComponentType::ChannelSelect => 8,
            ComponentType::Section => 9,
            ComponentType::TextDisplay => 10,
            ComponentType::Thumbnail => 11,
            ComponentType::MediaGallery => 12,
            ComponentType::FileDisplay => 13,
            ComponentType::Separator => 14,
            ComponentType::Container => 17,
            ComponentType::Unknown(key) => key,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::ActionRow => "action_row",
            ComponentType::Button => "button",
            ComponentType::StringSelect => "string_select",
            ComponentType::TextInput => "text_input",
            ComponentType::UserSelect => "user_select",
            ComponentType::RoleSelect => "role_select",
            ComponentType::MentionableSelect => "mentionable_select",
            ComponentType::ChannelSelect => "channel_select",
            ComponentType::Section => "section",
            ComponentType::TextDisplay => "text_display",
            ComponentType::Thumbnail => "thumbnail",
            ComponentType::MediaGallery => "media_gallery",
            ComponentType::FileDisplay => "file",
            ComponentType::Separator => "separator",
            ComponentType::Container => "container",
            ComponentType::Unknown(_) => "unknown",
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, ComponentType::Unknown(_))
    }

    /// The slots this discriminant may occupy.
    pub fn slots(self) -> &'static [Slot] {
        use Slot::*;
        match self {
            ComponentType::ActionRow => &[MessageTopLevel, ModalTopLevel, ContainerChild],
            ComponentType::Button => &[ActionRowChild, SectionAccessory],
            ComponentType::StringSelect
            | ComponentType::UserSelect
            | ComponentType::RoleSelect
            | ComponentType::MentionableSelect
            | ComponentType::ChannelSelect
            | ComponentType::TextInput => &[ActionRowChild],
            ComponentType::Section => &[MessageTopLevel, ContainerChild],
            ComponentType::TextDisplay => {
                &[MessageTopLevel, ModalTopLevel, SectionContent, ContainerChild]
            }
            ComponentType::Thumbnail => &[SectionAccessory],
            ComponentType::MediaGallery
            | ComponentType::FileDisplay
            | ComponentType::Separator => &[MessageTopLevel, ContainerChild],
            ComponentType::Container => &[MessageTopLevel],
            ComponentType::Unknown(_) => &Slot::ALL,
        }
    }

    pub fn fits(self, slot: Slot) -> bool {
        self.slots().contains(&slot)
    }

    pub fn is_message_compatible(self) -> bool {
        !matches!(self, ComponentType::TextInput)
    }

    pub fn is_modal_compatible(self) -> bool {
        matches!(
            self,
            ComponentType::ActionRow
                | ComponentType::TextInput
                | ComponentType::TextDisplay
                | ComponentType::StringSelect
                | ComponentType::UserSelect
                | ComponentType::RoleSelect
                | ComponentType::MentionableSelect
                | ComponentType::ChannelSelect
                | ComponentType::Unknown(_)
        )
    }

    pub fn is_select_menu(self) -> bool {
        matches!(
            self,
            ComponentType::StringSelect
                | ComponentType::UserSelect
                | ComponentType::RoleSelect
                | ComponentType::MentionableSelect
                | ComponentType::ChannelSelect
        )
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::Unknown(key) => write!(f, "unknown({key})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A tree position with its own set of admissible variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    MessageTopLevel,
    ModalTopLevel,
    ActionRowChild,
    SectionContent,
    SectionAccessory,
    ContainerChild,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::MessageTopLevel,
        Slot::ModalTopLevel,
        Slot::ActionRowChild,
        Slot::SectionContent,
        Slot::SectionAccessory,
        Slot::ContainerChild,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::MessageTopLevel => "message top-level",
            Slot::ModalTopLevel => "modal top-level",
            Slot::ActionRowChild => "action row child",
            Slot::SectionContent => "section content",
            Slot::SectionAccessory => "section accessory",
            Slot::ContainerChild => "container child",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour shared by every component, known or not.
pub trait Component {
    fn component_type(&self) -> ComponentType;

    /// The unique id, `0` when unassigned.
    fn unique_id(&self) -> i32;

    /// Returns a copy of this component with its unique id replaced.
    ///
    /// Fails with [`ComponentError::UnsupportedOperation`] for [`UnknownComponent`], whose shape
    /// is not understood well enough to re-emit.
    fn with_unique_id(&self, unique_id: i32) -> Result<Self, ComponentError>
    where
        Self: Sized;
}

/// Components allowed directly under a message.
pub trait MessageTopLevelComponent: Component + Into<AnyComponent> {}
/// Components allowed directly under a modal.
pub trait ModalTopLevelComponent: Component + Into<AnyComponent> {}
/// Components allowed inside an [`ActionRow`].
pub trait ActionRowChildComponent: Component + Into<AnyComponent> {}
/// Components allowed as the content of a [`Section`].
pub trait SectionContentComponent: Component + Into<AnyComponent> {}
/// Components allowed as the accessory of a [`Section`].
pub trait SectionAccessoryComponent: Component + Into<AnyComponent> {}
/// Components allowed inside a [`Container`].
pub trait ContainerChildComponent: Component + Into<AnyComponent> {}

/// A concrete variant that can be located inside an [`AnyComponent`].
pub trait Variant: Component + Sized {
    fn from_any(component: &AnyComponent) -> Option<&Self>;
}

/// The closed union of every component variant, plus the forward-compatible fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyComponent {
    ActionRow(ActionRow),
    Button(Button),
    StringSelect(StringSelect),
    EntitySelect(EntitySelect),
    TextInput(TextInput),
    Section(Section),
    TextDisplay(TextDisplay),
    Thumbnail(Thumbnail),
    MediaGallery(MediaGallery),
    FileDisplay(FileDisplay),
    Separator(Separator),
    Container(Container),
    Unknown(UnknownComponent),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            AnyComponent::ActionRow($inner) => $body,
            AnyComponent::Button($inner) => $body,
            AnyComponent::StringSelect($inner) => $body,
            AnyComponent::EntitySelect($inner) => $body,
            AnyComponent::TextInput($inner) => $body,
            AnyComponent::Section($inner) => $body,
            AnyComponent::TextDisplay($inner) => $body,
            AnyComponent::Thumbnail($inner) => $body,
            AnyComponent::MediaGallery($inner) => $body,
            AnyComponent::FileDisplay($inner) => $body,
            AnyComponent::Separator($inner) => $body,
            AnyComponent::Container($inner) => $body,
            AnyComponent::Unknown($inner) => $body,
        }
    };
}

impl Component for AnyComponent {
    fn component_type(&self) -> ComponentType {
        dispatch!(self, inner => inner.component_type())
    }

    fn unique_id(&self) -> i32 {
        dispatch!(self, inner => inner.unique_id())
    }

    fn with_unique_id(&self, unique_id: i32) -> Result<Self, ComponentError> {
        dispatch!(self, inner => inner.with_unique_id(unique_id).map(AnyComponent::from))
    }
}

impl Variant for AnyComponent {
    fn from_any(component: &AnyComponent) -> Option<&Self> {
        Some(component)
    }
}

impl AnyComponent {
    pub fn is_unknown(&self) -> bool {
        matches!(self, AnyComponent::Unknown(_))
    }

    /// Direct children in stored order, each paired with the slot it occupies.
    pub fn children_with_slots(&self) -> Vec<(Slot, &AnyComponent)> {
        match self {
            AnyComponent::ActionRow(row) => row
                .components
                .iter()
                .map(|child| (Slot::ActionRowChild, child))
                .collect(),
            AnyComponent::Section(section) => section
                .components
                .iter()
                .map(|child| (Slot::SectionContent, child))
                .chain(std::iter::once((
                    Slot::SectionAccessory,
                    section.accessory.as_ref(),
                )))
                .collect(),
            AnyComponent::Container(container) => container
                .components
                .iter()
                .map(|child| (Slot::ContainerChild, child))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Direct children in stored order.
    pub fn children(&self) -> Vec<&AnyComponent> {
        self.children_with_slots()
            .into_iter()
            .map(|(_, child)| child)
            .collect()
    }
}

macro_rules! variant_conversions {
    ($ty:ident) => {
        variant_conversions!($ty => $ty);
    };
    ($ty:ident => $variant:ident) => {
        impl Variant for $ty {
            fn from_any(component: &AnyComponent) -> Option<&Self> {
                match component {
                    AnyComponent::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for AnyComponent {
            fn from(value: $ty) -> Self {
                AnyComponent::$variant(value)
            }
        }
    };
}

macro_rules! known_variant {
    ($ty:ident) => {
        known_variant!($ty, ComponentType::$ty);
    };
    ($ty:ident, $kind:expr) => {
        impl Component for $ty {
            fn component_type(&self) -> ComponentType {
                $kind
            }

            fn unique_id(&self) -> i32 {
                self.unique_id
            }

            fn with_unique_id(&self, unique_id: i32) -> Result<Self, ComponentError> {
                Ok(self.clone().id(unique_id))
            }
        }

        impl $ty {
            /// Builder-style unique id assignment.
            pub fn id(mut self, unique_id: i32) -> Self {
                self.unique_id = unique_id;
                self
            }
        }

        variant_conversions!($ty);
    };
}

known_variant!(ActionRow);
known_variant!(Button);
known_variant!(StringSelect);
known_variant!(TextInput);
known_variant!(Section);
known_variant!(TextDisplay);
known_variant!(Thumbnail);
known_variant!(MediaGallery);
known_variant!(FileDisplay);
known_variant!(Separator);
known_variant!(Container);
variant_conversions!(UnknownComponent => Unknown);

impl Component for EntitySelect {
    fn component_type(&self) -> ComponentType {
        self.target.component_type()
    }

    fn unique_id(&self) -> i32 {
        self.unique_id
    }

    fn with_unique_id(&self, unique_id: i32) -> Result<Self, ComponentError> {
        Ok(self.clone().id(unique_id))
    }
}

impl EntitySelect {
    pub fn id(mut self, unique_id: i32) -> Self {
        self.unique_id = unique_id;
        self
    }
}

variant_conversions!(EntitySelect);

macro_rules! slot_members {
    ($slot:ident: $($ty:ty),+ $(,)?) => {
        $(impl $slot for $ty {})+
    };
}

slot_members!(MessageTopLevelComponent:
    ActionRow, Section, TextDisplay, MediaGallery, FileDisplay, Separator, Container,
    UnknownComponent,
);
slot_members!(ModalTopLevelComponent: ActionRow, TextDisplay, UnknownComponent);
slot_members!(ActionRowChildComponent:
    Button, StringSelect, EntitySelect, TextInput, UnknownComponent,
);
slot_members!(SectionContentComponent: TextDisplay, UnknownComponent);
slot_members!(SectionAccessoryComponent: Button, Thumbnail, UnknownComponent);
slot_members!(ContainerChildComponent:
    ActionRow, Section, TextDisplay, MediaGallery, FileDisplay, Separator, UnknownComponent,
);

pub(crate) fn is_unassigned(unique_id: &i32) -> bool {
    *unique_id == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_slots<T: Component>(value: &T) {
        for slot in value.component_type().slots() {
            assert!(value.component_type().fits(*slot));
        }
    }

    #[test]
    fn discriminants_round_trip_through_keys() {
        for kind in ComponentType::KNOWN {
            assert_eq!(ComponentType::from_key(kind.key()), kind);
        }
        assert_eq!(ComponentType::from_key(99), ComponentType::Unknown(99));
        assert_eq!(ComponentType::Unknown(99).key(), 99);
    }

    #[test]
    fn button_fits_row_and_accessory_slots() {
        let button = Button::primary("confirm", "Confirm");
        assert_slots(&button);
        assert!(ComponentType::Button.fits(Slot::ActionRowChild));
        assert!(ComponentType::Button.fits(Slot::SectionAccessory));
        assert!(!ComponentType::Button.fits(Slot::MessageTopLevel));
    }

    #[test]
    fn unknown_fits_every_slot() {
        for slot in Slot::ALL {
            assert!(ComponentType::Unknown(42).fits(slot), "{slot}");
        }
    }

    #[test]
    fn with_unique_id_preserves_other_fields() {
        let button = Button::primary("confirm", "Confirm");
        let renumbered = button.with_unique_id(7).expect("known variants accept ids");
        assert_eq!(renumbered.unique_id, 7);
        assert_eq!(renumbered.custom_id, button.custom_id);
        assert_eq!(renumbered.label, button.label);
        assert_eq!(button.unique_id, 0);
    }

    #[test]
    fn any_component_keeps_concrete_variant_on_renumber() {
        let any: AnyComponent = TextDisplay::new("hello").into();
        let renumbered = any.with_unique_id(3).unwrap();
        assert!(matches!(renumbered, AnyComponent::TextDisplay(ref text) if text.unique_id == 3));
    }

    #[test]
    fn section_children_list_content_before_accessory() {
        let section = Section::new(
            [TextDisplay::new("a"), TextDisplay::new("b")],
            Thumbnail::new("https://cdn.example/thumb.png"),
        );
        let any = AnyComponent::from(section);
        let slots: Vec<_> = any
            .children_with_slots()
            .into_iter()
            .map(|(slot, child)| (slot, child.component_type()))
            .collect();
        assert_eq!(
            slots,
            vec![
                (Slot::SectionContent, ComponentType::TextDisplay),
                (Slot::SectionContent, ComponentType::TextDisplay),
                (Slot::SectionAccessory, ComponentType::Thumbnail),
            ]
        );
    }

    #[test]
    fn unknown_converts_into_the_union_and_back() {
        let raw = match serde_json::json!({"type": 88, "id": 4}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!("object literal"),
        };
        let unknown = UnknownComponent::new(raw).unwrap();
        let any = AnyComponent::from(unknown.clone());
        assert!(any.is_unknown());
        assert_eq!(UnknownComponent::from_any(&any), Some(&unknown));
        assert!(Button::from_any(&any).is_none());
    }

    #[test]
    fn context_compatibility_table() {
        assert!(!ComponentType::TextInput.is_message_compatible());
        assert!(ComponentType::TextInput.is_modal_compatible());
        assert!(!ComponentType::Button.is_modal_compatible());
        assert!(ComponentType::Unknown(77).is_message_compatible());
        assert!(ComponentType::Unknown(77).is_modal_compatible());
    }
}
