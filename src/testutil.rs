//! Minimal one-shot HTTP stub so transport and accessor tests can run
//! without touching the network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A complete mount entry as the service returns it.
pub(crate) const MOUNT_BODY: &str = r#"{
    "id": 1,
    "name": "Company Chocobo",
    "description": "This sturdy chocobo has served in the Grand Companies.",
    "enhanced_description": "A loyal bird.",
    "tooltip": "A Grand Company chocobo.",
    "movement": "Terrestrial",
    "seats": 1,
    "order": 1,
    "order_group": 1,
    "patch": "2.0",
    "item_id": null,
    "tradeable": false,
    "owned": "95.2%",
    "icon": "https://ffxivcollect.com/images/mounts/icons/001.png",
    "image": "https://ffxivcollect.com/images/mounts/large/001.png",
    "bgm": "https://ffxivcollect.com/music/bgm_ride_chocobo.mp3",
    "sources": [
        {"type": "Quest", "text": "My Little Chocobo", "related_type": null, "related_id": null}
    ]
}"#;

/// A complete character profile as the service returns it.
pub(crate) const PROFILE_BODY: &str = r#"{
    "id": 29193229,
    "name": "Sleipnir Ramuh",
    "server": "Moogle",
    "data_center": "Chaos",
    "portrait": "https://img2.finalfantasyxiv.com/f/portrait.jpg",
    "avatar": "https://img2.finalfantasyxiv.com/f/avatar.jpg",
    "last_parsed": "2026-08-01 10:21:11 UTC",
    "verified": true,
    "achievements": {"count": 1810, "total": 2864, "points": 13805, "points_total": 24340, "ranked_points_total": 23565, "ranked_time": "about 14 hours", "public": true},
    "mounts": {"count": 103, "total": 229, "ranked_count": 103, "ranked_total": 207, "public": true},
    "minions": {"count": 280, "total": 483, "ranked_count": 280, "ranked_total": 455, "public": true},
    "orchestrions": {"count": 240, "total": 680},
    "spells": {"count": 104, "total": 124},
    "emotes": {"count": 98, "total": 303},
    "bardings": {"count": 30, "total": 91},
    "hairstyles": {"count": 18, "total": 68},
    "armoires": {"count": 120, "total": 396},
    "fashions": {"count": 24, "total": 94},
    "records": {"count": 30, "total": 38},
    "survey_records": {"count": 0, "total": 51},
    "cards": {"count": 168, "total": 425},
    "npcs": {"count": 98, "total": 285},
    "rankings": {
        "achievements": {"server": 43, "data_center": 351, "global": 1575},
        "mounts": {"server": 59, "data_center": 472, "global": 2147},
        "minions": {"server": 44, "data_center": 375, "global": 1727}
    },
    "relics": {
        "weapons": {"count": 19, "total": 165},
        "armor": {"count": 0, "total": 33},
        "tools": {"count": 2, "total": 88}
    },
    "leves": {
        "battlecraft": {"count": 40, "total": 106},
        "tradecraft": {"count": 150, "total": 408},
        "fieldcraft": {"count": 32, "total": 102}
    }
}"#;

/// Wrap result bodies into an `index`/`search` envelope.
pub(crate) fn envelope_of(results: &[&str], query: &str, count: u64) -> String {
    format!(
        r#"{{"query": {query}, "count": {count}, "results": [{}]}}"#,
        results.join(",")
    )
}

pub(crate) struct StubServer {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Serve one canned `(status, json body)` response per expected
    /// connection, recording each request target in order. Unconsumed
    /// responses just leave the listener thread parked until the test
    /// process exits.
    pub(crate) fn serve(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let base = format!("http://{}", listener.local_addr().expect("stub addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                if let Some(target) = read_request_target(&mut stream) {
                    seen.lock().expect("stub lock").push(target);
                }
                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        Self { base, requests }
    }

    /// `http://127.0.0.1:<port>` of the stub.
    pub(crate) fn base(&self) -> String {
        self.base.clone()
    }

    /// Request targets seen so far, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("stub lock").clone()
    }
}

fn read_request_target(stream: &mut std::net::TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }
    let head = String::from_utf8_lossy(&head);
    head.lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}
