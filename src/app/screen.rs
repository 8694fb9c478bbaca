//! Screen state: the board, or the settings picker over it

/// A field of the settings picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    Difficulty,
    Category,
    Theme,
}

impl SettingField {
    /// Get all fields in picker order
    pub fn all() -> &'static [SettingField] {
        &[
            SettingField::Difficulty,
            SettingField::Category,
            SettingField::Theme,
        ]
    }

    /// Get the display label for this field
    pub fn label(&self) -> &'static str {
        match self {
            SettingField::Difficulty => "Difficulty",
            SettingField::Category => "Category",
            SettingField::Theme => "Theme",
        }
    }

    fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }
}

/// The current application screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Playing,
    /// Settings picker open with `selected` highlighted
    Settings { selected: SettingField },
}

impl Screen {
    pub fn settings() -> Self {
        Screen::Settings {
            selected: SettingField::Difficulty,
        }
    }

    pub fn is_settings(&self) -> bool {
        matches!(self, Screen::Settings { .. })
    }

    pub fn selected_field(&self) -> Option<SettingField> {
        match self {
            Screen::Settings { selected } => Some(*selected),
            Screen::Playing => None,
        }
    }

    /// Move the picker highlight (up)
    pub fn field_up(&mut self) {
        if let Screen::Settings { selected } = self {
            let index = selected.index();
            if index > 0 {
                *selected = SettingField::all()[index - 1];
            }
        }
    }

    /// Move the picker highlight (down)
    pub fn field_down(&mut self) {
        if let Screen::Settings { selected } = self {
            let index = selected.index();
            if index < SettingField::all().len() - 1 {
                *selected = SettingField::all()[index + 1];
            }
        }
    }
}
