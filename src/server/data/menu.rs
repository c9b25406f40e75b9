//! Weekly menu.

use crate::server::model::menu::Menu;

const WEEKLY_MENU: [(&str, Menu); 7] = [
    (
        "Monday",
        Menu {
            breakfast: "Idli & Sambar",
            lunch: "Rice, Dal, Veg Curry",
            dinner: "Chapati & Paneer",
        },
    ),
    (
        "Tuesday",
        Menu {
            breakfast: "Dosa & Chutney",
            lunch: "Veg Biryani",
            dinner: "Fried Rice",
        },
    ),
    (
        "Wednesday",
        Menu {
            breakfast: "Pongal",
            lunch: "Sambar Rice",
            dinner: "Paratha",
        },
    ),
    (
        "Thursday",
        Menu {
            breakfast: "Upma",
            lunch: "Curd Rice",
            dinner: "Veg Pulao",
        },
    ),
    (
        "Friday",
        Menu {
            breakfast: "Poori & Curry",
            lunch: "Tomato Rice",
            dinner: "Noodles",
        },
    ),
    (
        "Saturday",
        Menu {
            breakfast: "Masala Dosa",
            lunch: "Veg Meals",
            dinner: "Chapati & Kurma",
        },
    ),
    (
        "Sunday",
        Menu {
            breakfast: "Aloo Paratha",
            lunch: "Special Biryani",
            dinner: "Light Dinner",
        },
    ),
];

/// Menu for a full English weekday name such as `"Tuesday"`.
///
/// Anything that is not a weekday name gets Monday's menu.
pub fn menu_for_day(day: &str) -> Menu {
    WEEKLY_MENU
        .iter()
        .find(|(name, _)| *name == day)
        .map(|(_, menu)| *menu)
        .unwrap_or(WEEKLY_MENU[0].1)
}
