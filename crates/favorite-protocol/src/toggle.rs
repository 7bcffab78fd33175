//! Button Toggle Plan

/// One class comes on, its counterpart goes off
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassSwap<'a> {
    pub add: &'a str,
    pub remove: &'a str,
}

impl<'a> ClassSwap<'a> {
    pub fn new(add: &'a str, remove: &'a str) -> Self {
        Self { add, remove }
    }
}

/// Class changes for a reported favorite state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TogglePlan<'a> {
    pub button: ClassSwap<'a>,
    pub icon: ClassSwap<'a>,
}
