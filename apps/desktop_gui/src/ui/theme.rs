use catalog_core::presentation::OwnerTone;
use eframe::egui::Color32;

pub const LINK: Color32 = Color32::from_rgb(72, 95, 199);
pub const DANGER: Color32 = Color32::from_rgb(241, 70, 104);
pub const SUCCESS: Color32 = Color32::from_rgb(72, 199, 142);
pub const BANNER_FILL: Color32 = Color32::from_rgb(111, 53, 53);
pub const BANNER_STROKE: Color32 = Color32::from_rgb(175, 96, 96);

pub fn owner_color(tone: OwnerTone) -> Color32 {
    match tone {
        OwnerTone::Link => LINK,
        OwnerTone::Danger => DANGER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_tones_map_to_distinct_colors() {
        assert_eq!(owner_color(OwnerTone::Link), LINK);
        assert_eq!(owner_color(OwnerTone::Danger), DANGER);
        assert_ne!(LINK, DANGER);
    }
}
