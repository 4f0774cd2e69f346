//! Record mapping tests: absent input, missing keys, malformed collections,
//! and nested hydration.

mod common;

use giantbomb_sdk::{
    Franchise, FromJson, Game, Genre, Identifier, Image, Platform, SearchResult, Video,
};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Absent or empty input
// ---------------------------------------------------------------------------

#[test]
fn every_record_is_none_for_absent_or_empty_input() {
    for input in [json!(null), json!({}), json!([]), json!(""), json!(0)] {
        assert!(Image::from_json(&input).is_none(), "Image from {}", input);
        assert!(Genre::from_json(&input).is_none(), "Genre from {}", input);
        assert!(Franchise::from_json(&input).is_none(), "Franchise from {}", input);
        assert!(Platform::from_json(&input).is_none(), "Platform from {}", input);
        assert!(Video::from_json(&input).is_none(), "Video from {}", input);
        assert!(Game::from_json(&input).is_none(), "Game from {}", input);
        assert!(SearchResult::from_json(&input).is_none(), "SearchResult from {}", input);
    }
}

// ---------------------------------------------------------------------------
// Missing keys
// ---------------------------------------------------------------------------

#[test]
fn missing_keys_stay_none() {
    let platform = Platform::from_json(&json!({ "id": 3 })).unwrap();
    assert_eq!(platform.id, Some(3));
    assert!(platform.name.is_none());
    assert!(platform.abbreviation.is_none());
    assert!(platform.deck.is_none());
    assert!(platform.api_detail_url.is_none());
    assert!(platform.image.is_none());

    let video = Video::from_json(&json!({ "name": "Quick Look" })).unwrap();
    assert!(video.id.is_none());
    assert!(video.url.is_none());
    assert!(video.site_detail_url.is_none());
}

#[test]
fn game_scalars_default_to_none_and_collections_to_empty() {
    let game = Game::from_json(&json!({ "id": 7 })).unwrap();
    assert_eq!(game.id, Some(7));
    assert!(game.name.is_none());
    assert!(game.deck.is_none());
    assert!(game.image.is_none());
    assert!(game.developers.is_none());
    assert!(game.publishers.is_none());
    assert!(game.original_release_date.is_none());
    assert!(game.date_added_gb.is_none());
    assert_eq!(game.platforms, Some(vec![]));
    assert_eq!(game.franchises, Some(vec![]));
    assert_eq!(game.images, Some(vec![]));
    assert_eq!(game.genres, Some(vec![]));
    assert_eq!(game.videos, Some(vec![]));
}

#[test]
fn wrong_scalar_type_leaves_only_that_field_none() {
    let genre = Genre::from_json(&json!({ "id": "seven", "name": "RPG" })).unwrap();
    assert!(genre.id.is_none());
    assert_eq!(genre.name.as_deref(), Some("RPG"));
}

// ---------------------------------------------------------------------------
// Game collections
// ---------------------------------------------------------------------------

#[test]
fn non_sequence_collections_become_none() {
    let game = Game::from_json(&json!({
        "id": 1,
        "platforms": 5,
        "franchises": { "id": 2 },
        "images": "not a list",
        "genres": null,
        "videos": true
    }))
    .unwrap();
    assert!(game.platforms.is_none());
    assert!(game.franchises.is_none());
    assert!(game.images.is_none());
    assert!(game.genres.is_none());
    assert!(game.videos.is_none());
    assert!(game.genre_records().is_empty());
}

#[test]
fn developers_and_publishers_keep_any_shape() {
    let game = Game::from_json(&json!({
        "id": 1,
        "developers": { "id": 5, "name": "Valve" },
        "publishers": "EA"
    }))
    .unwrap();
    assert_eq!(game.developers, Some(json!({ "id": 5, "name": "Valve" })));
    assert_eq!(game.publishers, Some(json!("EA")));

    let listed = Game::from_json(&json!({ "id": 2, "publishers": [ { "id": 8 } ] })).unwrap();
    assert_eq!(listed.publishers, Some(json!([ { "id": 8 } ])));
    assert!(listed.developers.is_none());
}

#[test]
fn collections_pass_raw_items_through() {
    let raw = json!([{ "id": 9, "name": "Mario", "extra": [1, 2] }, 3]);
    let game = Game::from_json(&json!({ "id": 1, "franchises": raw.clone() })).unwrap();
    let expected: Vec<Value> = raw.as_array().unwrap().clone();
    assert_eq!(game.franchises, Some(expected));

    let franchises = game.franchise_records();
    assert_eq!(franchises.len(), 1);
    assert_eq!(franchises[0].to_string(), "<9: Mario>");
}

#[test]
fn videos_are_read_from_videos_key() {
    let game = Game::from_json(&json!({
        "id": 1,
        "videos": [
            { "id": 10, "name": "Trailer", "site_detail_url": "https://example.test/v/10" },
            { "id": 11, "name": "Quick Look", "image": common::sample_image() }
        ]
    }))
    .unwrap();
    let videos = game.video_records();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].site_detail_url.as_deref(), Some("https://example.test/v/10"));
    assert!(videos[1].site_detail_url.is_none());
    assert!(videos[1].image.is_some());
}

// ---------------------------------------------------------------------------
// Full game mapping
// ---------------------------------------------------------------------------

#[test]
fn full_game_maps_every_present_value() {
    let source = common::sample_game();
    let game = Game::from_json(&source).unwrap();

    assert_eq!(game.id, Some(21170));
    assert_eq!(game.name.as_deref(), Some("Portal 2"));
    assert_eq!(game.deck.as_deref(), Some("Chell wakes up again."));
    assert_eq!(game.original_release_date.as_deref(), Some("2011-04-19"));
    assert_eq!(game.api_detail_url.as_deref(), Some("https://example.test/game/21170/"));
    assert_eq!(game.site_detail_url.as_deref(), Some("https://example.test/portal-2/"));
    assert_eq!(game.date_added_gb.as_deref(), Some("2009-03-05 12:00:00"));
    assert_eq!(game.date_last_updated_gb.as_deref(), Some("2020-01-01 00:00:00"));
    assert_eq!(game.genres.as_ref(), source["genres"].as_array());
    assert_eq!(game.developers.as_ref(), Some(&source["developers"]));

    let image = game.image.as_ref().unwrap();
    assert_eq!(image.icon.as_deref(), Some("https://example.test/icon.png"));
    assert_eq!(image.medium.as_deref(), Some("https://example.test/medium.png"));
    assert_eq!(image.tiny.as_deref(), Some("https://example.test/tiny.png"));
    assert_eq!(image.small.as_deref(), Some("https://example.test/small.png"));
    assert_eq!(image.thumb.as_deref(), Some("https://example.test/thumb.png"));
    assert_eq!(image.screen.as_deref(), Some("https://example.test/screen.png"));
    assert_eq!(image.super_url.as_deref(), Some("https://example.test/super.png"));

    let genres = game.genre_records();
    assert_eq!(genres[0].name.as_deref(), Some("Action"));
    assert_eq!(genres[1].api_detail_url.as_deref(), Some("https://example.test/genre/2/"));

    let platforms = game.platform_records();
    assert_eq!(platforms[1].abbreviation.as_deref(), Some("X360"));

    assert!(game.publishers.is_none());
    assert_eq!(game.franchises, Some(vec![]));
    assert_eq!(game.videos, Some(vec![]));
}

#[test]
fn serializing_a_game_writes_service_keys() {
    let game = Game::from_json(&common::sample_game()).unwrap();
    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["date_added"], "2009-03-05 12:00:00");
    assert_eq!(value["image"]["icon_url"], "https://example.test/icon.png");

    let again = Game::from_json(&value).unwrap();
    assert_eq!(again, game);
}

// ---------------------------------------------------------------------------
// Image hydration and display
// ---------------------------------------------------------------------------

#[test]
fn empty_nested_image_is_none() {
    let franchise = Franchise::from_json(&json!({ "id": 1, "image": {} })).unwrap();
    assert!(franchise.image.is_none());
}

#[test]
fn search_result_keeps_raw_image_and_hydrates_on_request() {
    let hit = SearchResult::from_json(&json!({
        "id": 3,
        "name": "Tetris",
        "image": { "thumb_url": "https://example.test/t.png", "original_url": "x" }
    }))
    .unwrap();
    assert_eq!(hit.image.as_ref().unwrap()["original_url"], "x");
    let image = hit.image_record().unwrap();
    assert_eq!(image.thumb.as_deref(), Some("https://example.test/t.png"));
    assert!(image.icon.is_none());
}

#[test]
fn display_uses_angle_bracket_form() {
    let genre = Genre::from_json(&json!({ "id": 4, "name": "Racing" })).unwrap();
    assert_eq!(genre.to_string(), "<4: Racing>");

    let nameless = Platform::from_json(&json!({ "id": 4 })).unwrap();
    assert_eq!(nameless.to_string(), "<4: ?>");
}

#[test]
fn records_convert_to_identifiers() {
    let game = Game::from_json(&json!({ "id": 99 })).unwrap();
    assert_eq!(Identifier::from(&game).resolve().unwrap(), 99);
    assert_eq!(Identifier::from(99).resolve().unwrap(), 99);
    assert!(Identifier::from(&Genre::default()).resolve().is_err());
}
