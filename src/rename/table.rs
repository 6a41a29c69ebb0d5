//! The fixed kebab-case to camelCase rename table for element thumbnails
//!
//! Entries are listed in the order they are processed. Light and `-dark`
//! variants sit next to each other; the `-dark` suffix is kept verbatim and
//! only the base name is camel-cased.

/// A single `(source, target)` pair in the rename table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameEntry {
    /// Current file name, relative to the working directory
    pub source: &'static str,
    /// File name after the rename, in the same directory
    pub target: &'static str,
}

impl RenameEntry {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }

    /// Whether the entry maps a name onto itself.
    ///
    /// Identity entries still get an existence check and a success line,
    /// but the rename leaves the file untouched.
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

/// Rename table in processing order
pub const RENAME_TABLE: &[RenameEntry] = &[
    RenameEntry::new("backgroundColor.svg", "backgroundColor.svg"),
    RenameEntry::new("backgroundColor-dark.svg", "backgroundColor-dark.svg"),
    RenameEntry::new("backgroundEmpty.svg", "backgroundEmpty.svg"),
    RenameEntry::new("backgroundEmpty-dark.svg", "backgroundEmpty-dark.svg"),
    RenameEntry::new("containerCenter.svg", "containerCenter.svg"),
    RenameEntry::new("containerCenter-dark.svg", "containerCenter-dark.svg"),
    RenameEntry::new("hero.svg", "hero.svg"),
    RenameEntry::new("hero-dark.svg", "hero-dark.svg"),
    // Blurbs
    RenameEntry::new("blurbs-3.svg", "blurbs3.svg"),
    RenameEntry::new("blurbs-3-dark.svg", "blurbs3-dark.svg"),
    RenameEntry::new("blurbs-4.svg", "blurbs4.svg"),
    RenameEntry::new("blurbs-4-dark.svg", "blurbs4-dark.svg"),
    RenameEntry::new("blurbs-vertical-3.svg", "blurbsVertical3.svg"),
    RenameEntry::new("blurbs-vertical-3-dark.svg", "blurbsVertical3-dark.svg"),
    // Buttons
    RenameEntry::new("button-primary-center.svg", "buttonPrimaryCenter.svg"),
    RenameEntry::new("button-primary-center-dark.svg", "buttonPrimaryCenter-dark.svg"),
    RenameEntry::new("button-primary-left.svg", "buttonPrimaryLeft.svg"),
    RenameEntry::new("button-primary-left-dark.svg", "buttonPrimaryLeft-dark.svg"),
    RenameEntry::new("button-secondary-center.svg", "buttonSecondaryCenter.svg"),
    RenameEntry::new("button-secondary-center-dark.svg", "buttonSecondaryCenter-dark.svg"),
    RenameEntry::new("button-secondary-left.svg", "buttonSecondaryLeft.svg"),
    RenameEntry::new("button-secondary-left-dark.svg", "buttonSecondaryLeft-dark.svg"),
    RenameEntry::new("buttons-2-center.svg", "buttons2Center.svg"),
    RenameEntry::new("buttons-2-center-dark.svg", "buttons2Center-dark.svg"),
    RenameEntry::new("buttons-2-left.svg", "buttons2Left.svg"),
    RenameEntry::new("buttons-2-left-dark.svg", "buttons2Left-dark.svg"),
    // Cards
    RenameEntry::new("cards-2.svg", "cards2.svg"),
    RenameEntry::new("cards-2-dark.svg", "cards2-dark.svg"),
    RenameEntry::new("cards-2-center.svg", "cards2Center.svg"),
    RenameEntry::new("cards-2-center-dark.svg", "cards2Center-dark.svg"),
    RenameEntry::new("cards-2x2.svg", "cards2x2.svg"),
    RenameEntry::new("cards-2x2-dark.svg", "cards2x2-dark.svg"),
    RenameEntry::new("cards-3.svg", "cards3.svg"),
    RenameEntry::new("cards-3-dark.svg", "cards3-dark.svg"),
    RenameEntry::new("cards-4.svg", "cards4.svg"),
    RenameEntry::new("cards-4-dark.svg", "cards4-dark.svg"),
    RenameEntry::new("cards-6.svg", "cards6.svg"),
    RenameEntry::new("cards-6-dark.svg", "cards6-dark.svg"),
    // Misc
    RenameEntry::new("chev-up.svg", "chevUp.svg"),
    RenameEntry::new("dark-layer.svg", "darkLayer.svg"),
    RenameEntry::new("light-layer.svg", "lightLayer.svg"),
    RenameEntry::new("styleguide.svg", "styleguide.svg"),
    RenameEntry::new("styleguide-dark.svg", "styleguide-dark.svg"),
    // Lists
    RenameEntry::new("list-1.svg", "list1.svg"),
    RenameEntry::new("list-1-dark.svg", "list1-dark.svg"),
    RenameEntry::new("list-2.svg", "list2.svg"),
    RenameEntry::new("list-2-dark.svg", "list2-dark.svg"),
    RenameEntry::new("list-3.svg", "list3.svg"),
    RenameEntry::new("list-3-dark.svg", "list3-dark.svg"),
    // Pricing
    RenameEntry::new("pricing-2.svg", "pricing2.svg"),
    RenameEntry::new("pricing-2-dark.svg", "pricing2-dark.svg"),
    // Zig-zag ("zz" is spelled out)
    RenameEntry::new("zz-left.svg", "zigzagLeft.svg"),
    RenameEntry::new("zz-left-dark.svg", "zigzagLeft-dark.svg"),
    RenameEntry::new("zz-right.svg", "zigzagRight.svg"),
    RenameEntry::new("zz-right-dark.svg", "zigzagRight-dark.svg"),
];
