use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arcana {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

/// Static reference entry. The catalog never changes at runtime.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    pub name: &'static str,
    pub emoji: &'static str,
    pub arcana: Arcana,
    pub suit: Option<Suit>,
    pub upright: &'static str,
    pub reversed: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Upright => "Upright",
            Orientation::Reversed => "Reversed",
        }
    }
}

/// A catalog card plus the orientation it came up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub card: &'static TarotCard,
    pub position: Orientation,
}

impl DrawnCard {
    pub fn name(&self) -> &'static str {
        self.card.name
    }

    /// Meaning for the orientation drawn.
    pub fn meaning(&self) -> &'static str {
        match self.position {
            Orientation::Upright => self.card.upright,
            Orientation::Reversed => self.card.reversed,
        }
    }

    /// "Name (Upright)", the form stored with a saved reading.
    pub fn label(&self) -> String {
        format!("{} ({})", self.card.name, self.position.as_str())
    }
}
