use crate::model::menu::MenuDto;

/// Dishes served on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

impl Menu {
    pub fn into_dto(self) -> MenuDto {
        MenuDto {
            breakfast: self.breakfast.to_string(),
            lunch: self.lunch.to_string(),
            dinner: self.dinner.to_string(),
        }
    }
}
