/// Highest valid indexed colour (256 = "by layer").
pub const MAX_COLOR_INDEX: u16 = 256;

/// Display attributes carried through chaining unchanged.
///
/// Every field is optional; an absent field means "not set on the source
/// entity" and can be filled from a parent with [`Style::or_inherit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub layer: Option<String>,
    pub color_index: Option<u16>,
    pub line_weight: Option<i16>,
}

impl Style {
    /// Creates a style on the given layer with no other attributes set.
    #[must_use]
    pub fn on_layer(layer: impl Into<String>) -> Self {
        Self {
            layer: Some(layer.into()),
            ..Self::default()
        }
    }

    /// Sets the colour index. Indices above [`MAX_COLOR_INDEX`] are ignored.
    #[must_use]
    pub fn with_color_index(mut self, color_index: u16) -> Self {
        if color_index <= MAX_COLOR_INDEX {
            self.color_index = Some(color_index);
        }
        self
    }

    /// Sets the line weight.
    #[must_use]
    pub fn with_line_weight(mut self, line_weight: i16) -> Self {
        self.line_weight = Some(line_weight);
        self
    }

    /// Fills every absent field from `parent`.
    #[must_use]
    pub fn or_inherit(self, parent: &Style) -> Self {
        Self {
            layer: self.layer.or_else(|| parent.layer.clone()),
            color_index: self.color_index.or(parent.color_index),
            line_weight: self.line_weight.or(parent.line_weight),
        }
    }

    /// Replaces layer and colour with those set on `owner`, keeping the rest.
    #[must_use]
    pub fn overridden_by(self, owner: &Style) -> Self {
        Self {
            layer: owner.layer.clone().or(self.layer),
            color_index: owner.color_index.or(self.color_index),
            line_weight: self.line_weight,
        }
    }

    /// Returns `true` if both styles name the same layer (or both name none).
    #[must_use]
    pub fn same_layer(&self, other: &Style) -> bool {
        self.layer == other.layer
    }
}
