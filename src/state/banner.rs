use bitflags::bitflags;
use serde::Serialize;

use crate::objects::ObjectEntryIndex;

pub type BannerIndex = u16;

pub const MAX_BANNERS: usize = 250;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BannerFlags: u8 {
        const NO_ENTRY = 1 << 0;
        const IS_LARGE_SCENERY = 1 << 1;
        const LINKED_TO_RIDE = 1 << 2;
        const IS_WALL = 1 << 3;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub id: BannerIndex,
    pub entry: Option<ObjectEntryIndex>,
    pub text: String,
    #[serde(serialize_with = "flag_bits")]
    pub flags: BannerFlags,
    pub colour: u8,
    pub text_colour: u8,
    pub ride_index: Option<u16>,
    pub position: (u8, u8),
}

fn flag_bits<S: serde::Serializer>(flags: &BannerFlags, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u8(flags.bits())
}

impl Banner {
    pub fn new(id: BannerIndex) -> Self {
        Self {
            id,
            entry: None,
            text: String::new(),
            flags: BannerFlags::empty(),
            colour: 0,
            text_colour: 0,
            ride_index: None,
            position: (0, 0),
        }
    }

    pub fn is_no_entry(&self) -> bool {
        self.flags.contains(BannerFlags::NO_ENTRY)
    }
}
