//! Integration tests for the library public API

use twenty_forty_eight::{
    game::{model::Model, side::Side, tile::Tile},
    GameError, Result, DESCRIPTION, NAME, VERSION,
};

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "twenty_forty_eight");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let grid_error = GameError::InvalidGrid("test grid error".to_string());
    assert!(matches!(grid_error, GameError::InvalidGrid(_)));

    let input_error = GameError::InvalidInput("test input error".to_string());
    assert!(matches!(input_error, GameError::InvalidInput(_)));

    let io_error: GameError = std::io::Error::other("boom").into();
    assert!(matches!(io_error, GameError::Io(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert!(success.is_ok());
    assert_eq!(success.unwrap(), 42);

    let failure: Result<i32> = Err(GameError::InvalidInput("test".to_string()));
    assert!(failure.is_err());
}

#[test]
fn test_public_game_surface() {
    // The façade a rendering/input layer consumes: tilt, tile, score,
    // game_over.
    let mut model = Model::new(4);
    model.add_tile(Tile::new(2, 0, 0));
    model.tilt(Side::North);
    assert_eq!(model.tile(0, 3).map(|t| t.value()), Some(2));
    assert_eq!(model.score(), 0);
    assert!(!model.game_over());
}
