use super::*;
use proptest::prelude::*;

fn item(id: &str, value: f64) -> Item {
    Item::new(id, id, value, Rarity::Godly).expect("valid item")
}

#[test]
fn test_color_parse_and_display() {
    let color: Color = "#FF5E7D".parse().unwrap();
    assert_eq!(color, Color::rgb(0xff, 0x5e, 0x7d));
    assert_eq!(color.to_string(), "#ff5e7d");

    // Prefix is optional.
    assert_eq!("4DFFDF".parse::<Color>().unwrap(), Color::rgb(0x4d, 0xff, 0xdf));
}

#[test]
fn test_color_rejects_malformed() {
    for value in ["", "#FFF", "#GGGGGG", "#FF5E7D00", "#ÿÿÿ"] {
        assert!(
            matches!(value.parse::<Color>(), Err(JackpotError::InvalidColor { .. })),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_color_shade_clamps() {
    let color = Color::rgb(0xc1, 0x7b, 0x10);
    assert_eq!(color.shade(GRADIENT_SHADE), Color::rgb(0xa3, 0x5d, 0x00));
    assert_eq!(color.shade(100), Color::rgb(0xff, 0xdf, 0x74));
    assert_eq!(color.shade(0), color);
}

#[test]
fn test_color_shade_saturates_at_extremes() {
    assert_eq!(Color::rgb(255, 255, 255).shade(i16::MAX), Color::rgb(255, 255, 255));
    assert_eq!(Color::rgb(0, 128, 255).shade(i16::MIN), Color::rgb(0, 0, 0));
    assert_eq!(Color::rgb(0, 128, 255).shade(i16::MAX), Color::rgb(255, 255, 255));
}

#[test]
fn test_color_serde_as_hex_string() {
    let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
    assert_eq!(json, "\"#010203\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color::rgb(1, 2, 3));
    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}

#[test]
fn test_item_value_validation() {
    assert!(Item::new("a", "Laser", 0.0, Rarity::Godly).is_ok());
    assert_eq!(
        Item::new("a", "Laser", -1.0, Rarity::Godly),
        Err(JackpotError::InvalidItemValue {
            item: "a".to_string(),
            value: -1.0
        })
    );
    assert!(Item::new("a", "Laser", f64::NAN, Rarity::Godly).is_err());
    assert!(Item::new("a", "Laser", f64::INFINITY, Rarity::Godly).is_err());
}

#[test]
fn test_participant_contributed_value() {
    let participant = Participant::new("1", "JohnDoe", Color::rgb(0, 0, 0))
        .with_item(item("a1", 100.0))
        .with_item(item("a2", 50.0));
    assert_eq!(participant.contributed_value(), 150.0);
    assert_eq!(participant.share_percent, 0.0);
    assert!(participant.validate().is_ok());
}

#[test]
fn test_participant_deserializes_without_share() {
    let participant: Participant = serde_json::from_str(
        r##"{"id":"2","name":"TradeMaster","color":"#4DFFDF",
            "items":[{"id":"b1","name":"Elderwood Scythe","value":200.0,"rarity":"Ancient"}]}"##,
    )
    .unwrap();
    assert_eq!(participant.share_percent, 0.0);
    assert_eq!(participant.items[0].rarity, Rarity::Ancient);
}

#[test]
fn test_error_messages() {
    let err = JackpotError::invalid_state("start spin", RoundPhase::Spinning);
    assert_eq!(err.to_string(), "cannot start spin while round is spinning");
    let err = JackpotError::DivisionByZero { participants: 0 };
    assert!(err.to_string().contains("zero"));
}

#[test]
fn test_rarity_ordering() {
    assert!(Rarity::Common < Rarity::Godly);
    assert!(Rarity::Godly < Rarity::Chroma);
    assert_eq!(Rarity::Vintage.to_string(), "Vintage");
}

proptest! {
    #[test]
    fn prop_shade_never_overflows(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), amount in any::<i16>()) {
        let shaded = Color::rgb(r, g, b).shade(amount);
        if amount >= 0 {
            prop_assert!(shaded.r >= r && shaded.g >= g && shaded.b >= b);
        } else {
            prop_assert!(shaded.r <= r && shaded.g <= g && shaded.b <= b);
        }
    }

    #[test]
    fn prop_color_display_roundtrips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::rgb(r, g, b);
        prop_assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }
}
