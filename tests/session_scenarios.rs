use std::collections::VecDeque;
use video_session::cli::run_session;
use video_session::model::{Library, Video};
use video_session::session::{SearchResults, SelectionPrompt};
use video_session::{OutputFormat, Response, SessionEngine, SessionError};

/// Selection prompt answering from a fixed script
#[derive(Default)]
struct ScriptedPrompt {
    answers: VecDeque<String>,
    offered: Vec<Vec<String>>,
}

impl ScriptedPrompt {
    fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            offered: Vec::new(),
        }
    }
}

impl SelectionPrompt for ScriptedPrompt {
    fn read_selection(&mut self, _term: &str, results: &SearchResults<'_>) -> Option<String> {
        self.offered
            .push(results.videos().iter().map(|v| v.id.clone()).collect());
        self.answers.pop_front()
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// The two-video catalog used throughout the scenarios
fn pets_catalog() -> Library {
    vec![
        Video::new("v1", "Amazing Cats", tags(&["cat", "animal"])),
        Video::new("v2", "Funny Dogs", tags(&["dog", "animal"])),
    ]
    .into_iter()
    .collect()
}

fn larger_catalog() -> Library {
    vec![
        Video::new("funny_dogs_video_id", "Funny Dogs", tags(&["#dog", "#animal"])),
        Video::new("amazing_cats_video_id", "Amazing Cats", tags(&["#cat", "#animal"])),
        Video::new("another_cat_video_id", "Another Cat Video", tags(&["#cat", "#animal"])),
        Video::new("life_at_google_video_id", "Life at Google", tags(&["#google", "#career"])),
        Video::new("nothing_video_id", "Video about nothing", Vec::new()),
    ]
    .into_iter()
    .collect()
}

fn session(answers: &[&str]) -> SessionEngine<Library, ScriptedPrompt> {
    SessionEngine::new(pets_catalog(), ScriptedPrompt::answering(answers)).with_seed(1)
}

fn hit_ids(response: &Response) -> Vec<String> {
    match response {
        Response::SearchResults { hits, .. } => hits.iter().map(|v| v.id.clone()).collect(),
        other => panic!("expected search results, got {:?}", other),
    }
}

#[test]
fn test_flagged_video_scenario() {
    let mut s = session(&[]);
    s.flag("v2", Some("not cute")).unwrap();

    let results = s.search_by_tag("animal").unwrap();
    assert_eq!(hit_ids(&results), vec!["v1"]);

    s.play("v1").unwrap();
    let now = s.playback().current().unwrap();
    assert_eq!((now.id, now.playing), ("v1", true));

    s.pause().unwrap();
    let now = s.playback().current().unwrap();
    assert_eq!((now.id, now.playing), ("v1", false));

    assert_eq!(
        s.play("v2"),
        Err(SessionError::Flagged {
            id: "v2".to_string(),
            reason: Some("not cute".to_string()),
        })
    );
    let now = s.playback().current().unwrap();
    assert_eq!((now.id, now.playing), ("v1", false));
}

#[test]
fn test_pets_playlist_scenario() {
    let mut s = session(&[]);
    s.create_playlist("Pets").unwrap();
    s.add_to_playlist("Pets", "v1").unwrap();

    assert_eq!(
        s.remove_from_playlist("pets", "v2"),
        Err(SessionError::NotInPlaylist {
            playlist: "pets".to_string(),
            id: "v2".to_string(),
        })
    );

    s.clear_playlist("PETS").unwrap();
    assert!(s.playlists().get("Pets").unwrap().is_empty());

    s.add_to_playlist("Pets", "v1").unwrap();
    assert_eq!(s.playlists().get("pets").unwrap().videos(), &["v1".to_string()]);
}

#[test]
fn test_duplicate_add_leaves_playlist_unchanged() {
    let mut s = session(&[]);
    s.create_playlist("My List").unwrap();
    s.add_to_playlist("my list", "v1").unwrap();
    s.add_to_playlist("my list", "v2").unwrap();

    assert_eq!(
        s.add_to_playlist("MY LIST", "v1"),
        Err(SessionError::AlreadyInPlaylist {
            playlist: "MY LIST".to_string(),
            id: "v1".to_string(),
        })
    );
    assert_eq!(
        s.playlists().get("My List").unwrap().videos(),
        &["v1".to_string(), "v2".to_string()]
    );
}

#[test]
fn test_missing_targets_are_reported() {
    let mut s = session(&[]);
    let missing = SessionError::PlaylistNotFound {
        name: "nope".to_string(),
    };

    assert_eq!(s.remove_from_playlist("nope", "v9"), Err(missing.clone()));
    assert_eq!(s.delete_playlist("nope"), Err(missing.clone()));
    assert_eq!(s.show_playlist("nope"), Err(missing));
    assert_eq!(
        s.allow("v9"),
        Err(SessionError::NotFound {
            id: "v9".to_string()
        })
    );
}

#[test]
fn test_playlists_listed_newest_first() {
    let mut s = session(&[]);
    for name in ["A", "B", "C"] {
        s.create_playlist(name).unwrap();
    }
    assert_eq!(
        s.show_all_playlists(),
        Response::Playlists {
            names: vec!["C".to_string(), "B".to_string(), "A".to_string()]
        }
    );
}

#[test]
fn test_flagged_playlist_member_is_annotated_not_hidden() {
    let mut s = session(&[]);
    s.create_playlist("Pets").unwrap();
    s.add_to_playlist("Pets", "v2").unwrap();
    s.flag("v2", None).unwrap();

    match s.show_playlist("pets").unwrap() {
        Response::PlaylistContents { videos, .. } => {
            assert_eq!(videos.len(), 1);
            assert!(videos[0].flagged);
            assert_eq!(videos[0].flag_reason, None);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn test_play_switches_to_latest_video() {
    let mut s = session(&[]);
    s.play("v1").unwrap();
    s.pause().unwrap();
    s.play("v2").unwrap();

    let now = s.playback().current().unwrap();
    assert_eq!((now.id, now.playing), ("v2", true));
    s.stop().unwrap();
    assert_eq!(s.stop(), Err(SessionError::NoneActive));
}

#[test]
fn test_flag_allow_flag_round_trip() {
    let mut s = session(&[]);
    s.flag("v1", Some("reason")).unwrap();
    s.allow("v1").unwrap();
    match s.flag("v1", Some("reason2")).unwrap() {
        Response::VideoFlagged { reason, .. } => assert_eq!(reason.as_deref(), Some("reason2")),
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn test_every_visible_video_found_by_its_title() {
    let catalog = larger_catalog();
    let videos: Vec<Video> = {
        use video_session::model::VideoCatalog;
        catalog.list_all().to_vec()
    };
    let mut s = SessionEngine::new(catalog, ScriptedPrompt::default());
    s.flag("life_at_google_video_id", None).unwrap();

    for video in &videos {
        let fragment: String = video.title.chars().skip(2).take(4).collect();
        let found = match s.search_by_title(&fragment.to_uppercase()) {
            Ok(response) => hit_ids(&response),
            Err(SessionError::EmptyResult { .. }) => Vec::new(),
            Err(e) => panic!("unexpected error: {:?}", e),
        };
        let occurrences = found.iter().filter(|id| **id == video.id).count();

        if video.id == "life_at_google_video_id" {
            assert_eq!(occurrences, 0);
        } else {
            assert_eq!(occurrences, 1, "{} not found by {:?}", video.id, fragment);
        }
    }
}

#[test]
fn test_flagged_video_never_searchable() {
    let mut s = SessionEngine::new(larger_catalog(), ScriptedPrompt::default());
    s.flag("amazing_cats_video_id", None).unwrap();

    for term in ["", "a", "cat", "#cat", "Amazing"] {
        for result in [s.search_by_title(term), s.search_by_tag(term)] {
            if let Ok(response) = result {
                assert!(!hit_ids(&response).contains(&"amazing_cats_video_id".to_string()));
            }
        }
    }
}

#[test]
fn test_search_selection_plays_chosen_hit() {
    let mut s = SessionEngine::new(
        larger_catalog(),
        ScriptedPrompt::answering(&["2", "seven", "9"]),
    );

    // Sorted: Amazing Cats, Another Cat Video
    match s.search_by_tag("#cat").unwrap() {
        Response::SearchResults { played: Some(playback), .. } => {
            assert_eq!(playback.video.id, "another_cat_video_id");
        }
        other => panic!("unexpected response: {:?}", other),
    }

    // Non-numeric and out-of-range answers are a silent "no"
    for _ in 0..2 {
        match s.search_by_title("cat").unwrap() {
            Response::SearchResults { played, .. } => assert!(played.is_none()),
            other => panic!("unexpected response: {:?}", other),
        }
    }
    assert!(s.playback().is_active("another_cat_video_id"));
}

#[test]
fn test_empty_search_skips_prompt() {
    let mut s = SessionEngine::new(larger_catalog(), ScriptedPrompt::answering(&["1"]));

    assert_eq!(
        s.search_by_title("blah"),
        Err(SessionError::EmptyResult {
            term: Some("blah".to_string())
        })
    );
    assert!(s.playback().current().is_none());
}

#[test]
fn test_text_session_transcript() {
    let mut s = SessionEngine::new(larger_catalog(), ScriptedPrompt::answering(&["1"]));
    let script = [
        "NUMBER_OF_VIDEOS",
        "PLAY amazing_cats_video_id",
        "PLAY funny_dogs_video_id",
        "PAUSE",
        "PAUSE",
        "SHOW_PLAYING",
        "CONTINUE",
        "CONTINUE",
        "CREATE_PLAYLIST my_PLAYlist",
        "CREATE_PLAYLIST MY_playlist",
        "ADD_TO_PLAYLIST my_playlist life_at_google_video_id",
        "FLAG_VIDEO funny_dogs_video_id dont like dogs",
        "ADD_TO_PLAYLIST my_playlist funny_dogs_video_id",
        "SHOW_PLAYLIST MY_PLAYLIST",
        "SEARCH_VIDEOS dog",
        "SEARCH_VIDEOS_WITH_TAG #google",
        "bogus",
        "EXIT",
        "STOP",
    ];
    let mut out = Vec::new();
    let executed = run_session(
        &mut s,
        script.iter().map(|l| Ok(l.to_string())),
        &mut out,
        OutputFormat::Text,
    )
    .unwrap();
    assert_eq!(executed, 16);

    let text = String::from_utf8(out).unwrap();
    let expected = [
        "5 videos in the library",
        "Playing video: Amazing Cats",
        "Stopping video: Amazing Cats",
        "Playing video: Funny Dogs",
        "Pausing video: Funny Dogs",
        "Video already paused: Funny Dogs",
        "Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED",
        "Continuing video: Funny Dogs",
        "Cannot continue video: Video is not paused",
        "Successfully created new playlist: my_PLAYlist",
        "Cannot create playlist: A playlist with the same name already exists",
        "Added video to my_playlist: Life at Google",
        "Stopping video: Funny Dogs",
        "Successfully flagged video: Funny Dogs (reason: dont like dogs)",
        "Cannot add video to my_playlist: Video is currently flagged (reason: dont like dogs)",
        "Showing playlist: MY_PLAYLIST",
        "   Life at Google (life_at_google_video_id) [#google #career]",
        "No search results for dog",
        "Playing video: Life at Google",
        "Unknown command: BOGUS. Type HELP for a list of available commands.",
    ];
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn test_json_session_reports() {
    let mut s = session(&[]);
    let mut out = Vec::new();
    run_session(
        &mut s,
        ["PLAY v1", "HELP", "ALLOW_VIDEO v1", "rewind"]
            .iter()
            .map(|l| Ok(l.to_string())),
        &mut out,
        OutputFormat::Json,
    )
    .unwrap();

    let reports: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    // Every stdout line is a JSON object, HELP and bad input included
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0]["outcome"], "success");
    assert_eq!(reports[0]["kind"], "playing");
    assert_eq!(reports[0]["payload"]["video"]["id"], "v1");
    assert_eq!(reports[1]["kind"], "help");
    assert!(reports[1]["payload"]["commands"].as_array().unwrap().len() > 10);
    assert_eq!(reports[2]["outcome"], "error");
    assert_eq!(reports[2]["kind"], "not_flagged");
    assert_eq!(reports[3]["outcome"], "error");
    assert_eq!(reports[3]["kind"], "usage");
    assert!(reports[3]["payload"]["message"]
        .as_str()
        .unwrap()
        .contains("REWIND"));
}
