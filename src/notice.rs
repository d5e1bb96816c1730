// Dialog texts. Copy is fixed; keep it byte for byte.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Nothing fits any more.
    Filled,
    /// A narrow "e" was refused while there is still room for yolks.
    NoSpaceForE,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::Filled => "Eggselent, the canvas is filled.",
            Notice::NoSpaceForE => "Only yellows, please.",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Notice::Filled => "Type 'R' to reset the canvas or 'esc' to close this dialog.",
            Notice::NoSpaceForE => {
                "Type 'R' to reset the canvas, add more yellows with 'G', or 'esc' to close this dialog."
            }
        }
    }
}
