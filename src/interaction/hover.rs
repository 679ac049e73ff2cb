const LIFTED_STYLE: &str = "transform: translateY(-10px) scale(1.02); transition: transform 0.3s ease;";
// The transition set on enter stays so the card eases back down.
const SETTLED_STYLE: &str = "transform: translateY(0) scale(1); transition: transform 0.3s ease;";

/// Pointer state of a glass card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardHover {
    /// Never hovered: no inline style, the stylesheet decides.
    #[default]
    Untouched,
    Lifted,
    Settled,
}

impl CardHover {
    pub fn entered(self) -> Self {
        Self::Lifted
    }

    pub fn left(self) -> Self {
        match self {
            Self::Untouched => Self::Untouched,
            Self::Lifted | Self::Settled => Self::Settled,
        }
    }

    pub fn style(self) -> Option<&'static str> {
        match self {
            Self::Untouched => None,
            Self::Lifted => Some(LIFTED_STYLE),
            Self::Settled => Some(SETTLED_STYLE),
        }
    }
}
