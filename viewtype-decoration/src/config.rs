use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{AdjacentRule, DividerInsets, DividerStyle, SideSpaceRule, ViewType};

/// Immutable spacing and divider configuration.
///
/// Built once through [`DecorationConfigBuilder`]. Rule lists are stored in `Arc`s so the
/// configuration is cheap to clone and can back several decorations at once.
///
/// Rule lookup is first-match-wins in declaration order. Duplicate rules are accepted; later
/// duplicates are simply never reached.
#[derive(Clone, Debug)]
pub struct DecorationConfig {
    default_space: i32,
    first_space: i32,
    default_side_space: i32,
    side_spaces: Arc<[SideSpaceRule]>,
    adjacent_spaces: Arc<[AdjacentRule]>,
    divider: Option<DividerStyle>,
    divider_insets: DividerInsets,
}

impl DecorationConfig {
    pub fn builder() -> DecorationConfigBuilder {
        DecorationConfigBuilder::new()
    }

    /// Top space of every item outside the first row.
    pub fn default_space(&self) -> i32 {
        self.default_space
    }

    /// Top space of items in the first row.
    pub fn first_space(&self) -> i32 {
        self.first_space
    }

    /// Left/right space of items whose type has no side rule.
    pub fn default_side_space(&self) -> i32 {
        self.default_side_space
    }

    pub fn side_space_rules(&self) -> &[SideSpaceRule] {
        &self.side_spaces
    }

    pub fn adjacent_rules(&self) -> &[AdjacentRule] {
        &self.adjacent_spaces
    }

    /// Paint style for divider lines, or `None` for a spacing-only decoration.
    pub fn divider(&self) -> Option<&DividerStyle> {
        self.divider.as_ref()
    }

    pub fn divider_insets(&self) -> DividerInsets {
        self.divider_insets
    }

    /// Returns the first side rule registered for `view_type`.
    pub fn side_space_for(&self, view_type: ViewType) -> Option<&SideSpaceRule> {
        self.side_spaces.iter().find(|rule| rule.matches(view_type))
    }

    /// Returns the space of the first adjacent rule registered for the type pair.
    pub fn adjacent_space_for(
        &self,
        previous_view_type: ViewType,
        view_type: ViewType,
    ) -> Option<i32> {
        self.adjacent_spaces
            .iter()
            .find(|rule| rule.matches(previous_view_type, view_type))
            .map(|rule| rule.space)
    }
}

impl Default for DecorationConfig {
    fn default() -> Self {
        DecorationConfigBuilder::new().build()
    }
}

/// Accumulates spacing rules and divider settings for a [`DecorationConfig`].
///
/// ```rust
/// use viewtype_decoration::DecorationConfig;
///
/// const HEADER: i32 = 1;
/// const CARD: i32 = 2;
///
/// let config = DecorationConfig::builder()
///     .default_space(10)
///     .side_space(CARD, 16)
///     .adjacent_space(HEADER, CARD, 4)
///     .build();
///
/// assert_eq!(config.adjacent_space_for(HEADER, CARD), Some(4));
/// assert_eq!(config.side_space_for(HEADER), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DecorationConfigBuilder {
    default_space: i32,
    first_space: i32,
    default_side_space: i32,
    side_spaces: Vec<SideSpaceRule>,
    adjacent_spaces: Vec<AdjacentRule>,
    divider: Option<DividerStyle>,
    divider_insets: DividerInsets,
}

impl DecorationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the top space of items in the first row. Defaults to `0`.
    pub fn first_space(mut self, space: i32) -> Self {
        self.first_space = space;
        self
    }

    /// Sets the top space between items. Defaults to `0`.
    ///
    /// This also resets the divider insets; use [`Self::default_space_with_insets`] to set
    /// both at once.
    pub fn default_space(self, space: i32) -> Self {
        self.default_space_with_insets(space, 0, 0)
    }

    /// Sets the top space between items plus a fixed horizontal inset for divider lines.
    pub fn default_space_with_insets(
        mut self,
        space: i32,
        inset_start: i32,
        inset_end: i32,
    ) -> Self {
        self.default_space = space;
        self.divider_insets = DividerInsets {
            start: inset_start,
            end: inset_end,
        };
        self
    }

    /// Sets the left/right space of items without a side rule. Defaults to `0`.
    pub fn default_side_space(mut self, space: i32) -> Self {
        self.default_side_space = space;
        self
    }

    /// Adds a symmetric side rule for `view_type`.
    pub fn side_space(self, view_type: ViewType, space: i32) -> Self {
        self.side_spaces(view_type, space, space)
    }

    /// Adds a side rule for `view_type` with distinct start/end spaces.
    pub fn side_spaces(mut self, view_type: ViewType, start_space: i32, end_space: i32) -> Self {
        self.side_spaces.push(SideSpaceRule {
            view_type,
            start_space,
            end_space,
        });
        self
    }

    /// Adds a top space override for `view_type` directly following `previous_view_type`.
    pub fn adjacent_space(
        mut self,
        previous_view_type: ViewType,
        view_type: ViewType,
        space: i32,
    ) -> Self {
        self.adjacent_spaces.push(AdjacentRule {
            previous_view_type,
            view_type,
            space,
        });
        self
    }

    /// Enables divider painting with `color`. Anti-aliasing is switched on.
    pub fn divider_color(mut self, color: peniko::Color) -> Self {
        let style = self.divider.get_or_insert_with(DividerStyle::default);
        style.color = color;
        style.anti_alias = true;
        self
    }

    /// Enables divider painting and sets its anti-aliasing flag.
    pub fn divider_anti_alias(mut self, anti_alias: bool) -> Self {
        self.divider
            .get_or_insert_with(DividerStyle::default)
            .anti_alias = anti_alias;
        self
    }

    pub fn build(self) -> DecorationConfig {
        ddebug!(
            default_space = self.default_space,
            first_space = self.first_space,
            side_rules = self.side_spaces.len(),
            adjacent_rules = self.adjacent_spaces.len(),
            divider = self.divider.is_some(),
            "DecorationConfigBuilder::build"
        );
        DecorationConfig {
            default_space: self.default_space,
            first_space: self.first_space,
            default_side_space: self.default_side_space,
            side_spaces: self.side_spaces.into(),
            adjacent_spaces: self.adjacent_spaces.into(),
            divider: self.divider,
            divider_insets: self.divider_insets,
        }
    }
}
