use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::json;

use crate::{
    error::Error,
    meal::Meal,
    request::{dummy::DummyApi, endpoint, Api},
};

use super::{list::sort_by_name, *};

const BASE: &str = "http://invalid.local/api";

fn meal(id: &str, name: &str) -> Meal {
    Meal {
        id: id.into(),
        name: name.into(),
        thumbnail_url: format!("http://invalid.local/{}.jpg", id),
    }
}

fn list_json(names: &[&str]) -> String {
    let meals: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            json!({
                "strMeal": name,
                "strMealThumb": format!("http://invalid.local/{}.jpg", idx),
                "idMeal": idx.to_string(),
            })
        })
        .collect();
    json!({ "meals": meals }).to_string()
}

fn names(screen: &ListScreen) -> Vec<String> {
    match screen.state() {
        ScreenState::Loaded(meals) => meals.iter().map(|meal| meal.name.clone()).collect(),
        other => panic!("Screen not loaded: {:?}", other),
    }
}

fn dessert_url() -> reqwest::Url {
    endpoint(BASE, "filter.php", &[("c", "Dessert")]).unwrap()
}

fn lookup_url(id: &str) -> reqwest::Url {
    endpoint(BASE, "lookup.php", &[("i", id)]).unwrap()
}

#[test]
fn sorting_is_case_sensitive() {
    let sorted = sort_by_name(vec![
        meal("1", "Tiramisu"),
        meal("2", "Apple Pie"),
        meal("3", "apple pie"),
    ]);
    let names: Vec<_> = sorted.iter().map(|meal| meal.name.as_str()).collect();
    assert_eq!(names, vec!["Apple Pie", "Tiramisu", "apple pie"]);
}

#[test]
fn sorting_is_stable() {
    let sorted = sort_by_name(vec![meal("1", "Pie"), meal("2", "Cake"), meal("3", "Pie")]);
    let ids: Vec<_> = sorted.iter().map(|meal| meal.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);
}

#[test]
fn list_screen_starts_loading() {
    let screen = ListScreen::new(BASE);
    assert_eq!(screen.state(), &ScreenState::Loading);
    assert!(screen.meal(1).is_none());
}

#[test]
fn list_screen_loads_sorted_meals() {
    let api = DummyApi::create().unwrap();
    api.register(&dessert_url(), &list_json(&["Tiramisu", "Apple Pie", "apple pie"]));
    let mut screen = ListScreen::new(BASE);
    screen.load_meals(&api);
    assert_eq!(names(&screen), vec!["Apple Pie", "Tiramisu", "apple pie"]);
    assert_eq!(screen.meal(2).map(|meal| meal.id.as_str()), Some("0"));
    assert!(screen.meal(0).is_none());
    assert!(screen.meal(4).is_none());
}

#[test]
fn list_screen_fails_on_transport_errors() {
    let api = DummyApi::create().unwrap();
    api.register_status(&dessert_url(), StatusCode::BAD_GATEWAY, "");
    let mut screen = ListScreen::new(BASE);
    screen.load_meals(&api);
    match screen.state() {
        ScreenState::Failed(why) => {
            assert!(why.starts_with("Failed to fetch meals: "));
            assert!(why.contains("502"));
        }
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[test]
fn list_screen_fails_on_decode_errors() {
    let api = DummyApi::create().unwrap();
    api.register(&dessert_url(), r#"{ "meals": [ { "strMeal": 1 } ] }"#);
    let mut screen = ListScreen::new(BASE);
    screen.load_meals(&api);
    assert!(matches!(screen.state(), ScreenState::Failed(why) if why.contains("deserialization")));
}

#[test]
fn list_screen_fails_on_null_lists() {
    let api = DummyApi::create().unwrap();
    api.register(&dessert_url(), r#"{ "meals": null }"#);
    let mut screen = ListScreen::new(BASE);
    screen.load_meals(&api);
    match screen.state() {
        ScreenState::Failed(why) => {
            assert!(why.starts_with("Failed to fetch meals: deserialization failed"))
        }
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[test]
fn list_screen_shows_empty_lists() {
    let api = DummyApi::create().unwrap();
    api.register(&dessert_url(), r#"{ "meals": [] }"#);
    let mut screen = ListScreen::new(BASE);
    screen.load_meals(&api);
    assert_eq!(screen.state(), &ScreenState::Loaded(vec![]));
}

#[test]
fn list_screen_fails_on_malformed_urls() {
    let api = DummyApi::create().unwrap();
    let mut screen = ListScreen::new("no base at all");
    screen.load_meals(&api);
    assert!(matches!(screen.state(), ScreenState::Failed(why) if why.contains("malformed url")));
}

#[test]
fn list_screen_refetches_on_reentry() {
    let api = DummyApi::create().unwrap();
    api.register(&dessert_url(), &list_json(&["Cake"]));
    let mut screen = ListScreen::new(BASE);
    screen.load_meals(&api);
    assert_eq!(names(&screen), vec!["Cake"]);
    api.register(&dessert_url(), &list_json(&["Cake", "Brownie"]));
    screen.load_meals(&api);
    assert_eq!(names(&screen), vec!["Brownie", "Cake"]);
}

#[test]
fn detail_screen_loads_the_meal() {
    let api = DummyApi::create().unwrap();
    api.register(
        &lookup_url("52768"),
        &json!({
            "meals": [{
                "idMeal": "52768",
                "strMeal": "Apple Frangipan Tart",
                "strInstructions": "Bake it.",
                "strMealThumb": "http://invalid.local/tart.jpg",
                "strIngredient1": "Flour",
                "strIngredient2": "",
                "strIngredient3": "Sugar",
                "strMeasure1": "1 cup",
                "strMeasure2": "2 tbsp",
                "strMeasure3": "1 cup",
            }]
        })
        .to_string(),
    );
    let mut screen = DetailScreen::new(BASE, "52768".into());
    assert_eq!(screen.state(), &ScreenState::Loading);
    screen.load_detail(&api);
    match screen.state() {
        ScreenState::Loaded(detail) => {
            assert_eq!(detail.id, "52768");
            let pairs: Vec<_> = detail.filtered_pairs().collect();
            assert_eq!(pairs, vec![("Flour", "1 cup"), ("Sugar", "1 cup")]);
        }
        other => panic!("Expected detail, got {:?}", other),
    }
    let lines = screen.lines(80);
    assert!(lines.iter().any(|line| line.contains("Flour: 1 cup")));
}

#[test]
fn detail_screen_fails_when_not_found() {
    let api = DummyApi::create().unwrap();
    api.register(&lookup_url("1"), r#"{ "meals": [] }"#);
    api.register(&lookup_url("2"), r#"{ "meals": null }"#);
    for id in &["1", "2"] {
        let mut screen = DetailScreen::new(BASE, id.to_string());
        screen.load_detail(&api);
        match screen.state() {
            ScreenState::Failed(why) => {
                assert_eq!(
                    why,
                    &format!(
                        "Failed to fetch meal details: No meal details found for id \"{}\"",
                        id
                    )
                );
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }
}

#[test]
fn detail_screen_fails_on_decode_errors() {
    let api = DummyApi::create().unwrap();
    api.register(
        &lookup_url("52768"),
        &json!({
            "meals": [{
                "idMeal": "52768",
                "strMeal": "Apple Frangipan Tart",
                "strInstructions": null,
                "strMealThumb": "http://invalid.local/tart.jpg",
            }]
        })
        .to_string(),
    );
    let mut screen = DetailScreen::new(BASE, "52768".into());
    screen.load_detail(&api);
    match screen.state() {
        ScreenState::Failed(why) => assert!(
            why.starts_with("Failed to fetch meal details: deserialization failed while decoding response"),
            "unexpected message {:?}",
            why
        ),
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[test]
fn detail_screen_fails_on_unknown_urls() {
    let api = DummyApi::create().unwrap();
    let mut screen = DetailScreen::new(BASE, "404".into());
    screen.load_detail(&api);
    assert!(matches!(screen.state(), ScreenState::Failed(why) if why.contains("404")));
    assert_eq!(screen.meal_id(), "404");
}

#[test]
fn stale_tickets_are_discarded() {
    let mut screen: Screen<u8> = Screen::new();
    let first = screen.begin();
    let second = screen.begin();
    assert!(!screen.settle(first, Ok(1), "ctx"));
    assert_eq!(screen.state(), &ScreenState::Loading);
    assert!(screen.settle(second, Ok(2), "ctx"));
    assert_eq!(screen.state(), &ScreenState::Loaded(2));
}

#[test]
fn leaving_discards_in_flight_results() {
    let mut screen: Screen<u8> = Screen::new();
    let ticket = screen.begin();
    screen.leave();
    assert!(!screen.settle(ticket, Err(Error::MealNotFound("1".into())), "ctx"));
    assert_eq!(screen.state(), &ScreenState::Loading);
}

#[test]
fn failures_carry_context() {
    let mut screen: Screen<u8> = Screen::new();
    let ticket = screen.begin();
    assert!(screen.settle(ticket, Err(Error::MealNotFound("7".into())), "Oops"));
    assert_eq!(
        screen.state(),
        &ScreenState::Failed(String::from("Oops: No meal details found for id \"7\""))
    );
}
