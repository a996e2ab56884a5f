use sea_battle::{Coordinate, GameError, Intent, Orientation};

fn c(s: &str) -> Coordinate {
    s.parse().unwrap()
}

#[test]
fn test_placement_commands() {
    assert_eq!(
        "place b2 v".parse::<Intent>().unwrap(),
        Intent::PlaceAnchored {
            anchor: c("B2"),
            orientation: Orientation::Vertical
        }
    );
    assert_eq!(
        "PLACE J6 Horizontal".parse::<Intent>().unwrap(),
        Intent::PlaceAnchored {
            anchor: c("J6"),
            orientation: Orientation::Horizontal
        }
    );
    assert_eq!(
        "drag A1 A5".parse::<Intent>().unwrap(),
        Intent::PlaceDragged {
            start: c("A1"),
            end: c("A5")
        }
    );
    assert_eq!(
        "select c1 c2 c3".parse::<Intent>().unwrap(),
        Intent::PlaceCells(vec![c("C1"), c("C2"), c("C3")])
    );
    assert_eq!("auto".parse::<Intent>().unwrap(), Intent::AutoPlace);
}

#[test]
fn test_attack_forms() {
    assert_eq!("fire D4".parse::<Intent>().unwrap(), Intent::Attack(c("D4")));
    assert_eq!("attack j10".parse::<Intent>().unwrap(), Intent::Attack(c("J10")));
    assert_eq!("  e7  ".parse::<Intent>().unwrap(), Intent::Attack(c("E7")));
}

#[test]
fn test_session_commands() {
    assert_eq!("show".parse::<Intent>().unwrap(), Intent::Show);
    assert_eq!("board".parse::<Intent>().unwrap(), Intent::Show);
    assert_eq!("restart".parse::<Intent>().unwrap(), Intent::Restart);
    assert_eq!("?".parse::<Intent>().unwrap(), Intent::Help);
    assert_eq!("Quit".parse::<Intent>().unwrap(), Intent::Quit);
    assert_eq!("exit".parse::<Intent>().unwrap(), Intent::Quit);
}

#[test]
fn test_bad_input() {
    assert!(matches!("".parse::<Intent>(), Err(GameError::UnknownIntent(_))));
    assert!(matches!("dance".parse::<Intent>(), Err(GameError::UnknownIntent(_))));
    assert!(matches!("K1".parse::<Intent>(), Err(GameError::UnknownIntent(_))));
    assert!(matches!("place B2 up".parse::<Intent>(), Err(GameError::UnknownIntent(_))));
    assert!(matches!("select".parse::<Intent>(), Err(GameError::UnknownIntent(_))));
    assert!(matches!(
        "fire A11".parse::<Intent>(),
        Err(GameError::MalformedCoordinate(_))
    ));
    assert!(matches!(
        "fire C07".parse::<Intent>(),
        Err(GameError::MalformedCoordinate(_))
    ));
    assert!(matches!(
        "drag A1 Z9".parse::<Intent>(),
        Err(GameError::MalformedCoordinate(_))
    ));
}
