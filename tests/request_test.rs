use quadbeat::{
    backend::request::{self, Algorithm, GraphType, RecommendationQuery},
    session::SessionId,
    types::Song,
};
use reqwest::Method;

#[test]
fn test_song_based_query_uses_bfs() {
    let query = RecommendationQuery::SongBased("S1".to_string());
    assert_eq!(query.graph_type(), GraphType::SongBased);
    assert_eq!(query.algorithm(), Algorithm::Bfs);

    let spec = request::recommend(&query);
    assert_eq!(spec.method, Method::GET);
    assert_eq!(spec.path, "/recommend");
    assert_eq!(
        spec.query_string(),
        "songId=S1&graphType=SONG_BASED&algorithm=BFS"
    );
}

#[test]
fn test_mood_based_query_sends_mood_as_song_id() {
    let spec = request::recommend(&RecommendationQuery::MoodBased("happy".to_string()));

    // the mood label travels in the songId parameter
    assert_eq!(spec.param("songId"), Some("happy"));
    assert_eq!(spec.param("graphType"), Some("MOOD_BASED"));
    assert_eq!(spec.param("algorithm"), Some("DIJKSTRA"));
    assert_eq!(
        spec.query_string(),
        "songId=happy&graphType=MOOD_BASED&algorithm=DIJKSTRA"
    );
}

#[test]
fn test_parameters_are_percent_encoded() {
    let spec = request::recommend(&RecommendationQuery::MoodBased("feel good & calm".to_string()));
    assert_eq!(
        spec.query_string(),
        "songId=feel%20good%20%26%20calm&graphType=MOOD_BASED&algorithm=DIJKSTRA"
    );

    let search = request::search("Björk/Joga?");
    assert_eq!(search.query_string(), "query=Bj%C3%B6rk%2FJoga%3F");
    assert_eq!(search.param("query"), Some("Björk/Joga?"));
}

#[test]
fn test_url_joins_base_and_path() {
    let spec = request::search("Imagine");
    assert_eq!(
        spec.url("http://localhost:8080/"),
        "http://localhost:8080/search?query=Imagine"
    );
    assert_eq!(
        spec.url("http://localhost:8080"),
        "http://localhost:8080/search?query=Imagine"
    );
}

#[test]
fn test_playlist_requests() {
    let session = SessionId::new("user abc");

    let load = request::load_playlist(&session);
    assert_eq!(load.method, Method::GET);
    assert_eq!(load.path, "/playlist");
    assert_eq!(load.query_string(), "sessionId=user%20abc");
    assert!(load.body.is_none());

    let song = Song {
        title: Some("Y".to_string()),
        ..Song::new("S9")
    };
    let add = request::add_to_playlist(&session, &song);
    assert_eq!(add.method, Method::POST);
    assert_eq!(add.path, "/playlist/add");
    assert_eq!(add.query_string(), "sessionId=user%20abc");
    assert_eq!(add.body, Some(song));

    let remove = request::remove_from_playlist(&session, "S9");
    assert_eq!(remove.method, Method::DELETE);
    assert_eq!(remove.path, "/playlist/remove");
    assert_eq!(remove.query_string(), "sessionId=user%20abc&songId=S9");

    let clear = request::clear_playlist(&session);
    assert_eq!(clear.method, Method::DELETE);
    assert_eq!(clear.path, "/playlist/clear");
    assert_eq!(clear.query_string(), "sessionId=user%20abc");
}

#[test]
fn test_song_body_serializes_camel_case() {
    let song = Song {
        title: Some("Y".to_string()),
        score: Some(0.5),
        ..Song::new("S9")
    };
    let json = serde_json::to_value(&song).unwrap();
    assert_eq!(json["songId"], "S9");
    assert_eq!(json["title"], "Y");
    assert_eq!(json["score"], 0.5);
    assert!(json.get("artist").is_none());
}
