//! Full CRUD lifecycle against a live server.
//!
//! # Design
//! Starts the server on a random port, then drives every route over real
//! HTTP using ureq. Complements the in-process router tests by covering the
//! actual listener and serialization path.

use ureq::Agent;

/// Agent with status-as-error disabled so 4xx responses come back as data.
fn agent() -> Agent {
    Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn read_json(response: &mut ureq::http::Response<ureq::Body>) -> serde_json::Value {
    let text = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn crud_lifecycle_over_http() {
    let base = start_server();
    let agent = agent();

    // list starts empty
    let mut resp = agent.get(&format!("{base}/todos")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(&mut resp), serde_json::json!([]));

    // create
    let mut resp = agent
        .post(&format!("{base}/todos"))
        .content_type("application/json")
        .send(r#"{"name":"Walk dog","description":"around the block","priority":"medium"}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    let created = read_json(&mut resp);
    assert_eq!(created["id"], 1);
    assert_eq!(created["priority"], "medium");

    // get
    let mut resp = agent.get(&format!("{base}/todos/1")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(&mut resp), created);

    // partial update
    let mut resp = agent
        .put(&format!("{base}/todos/1"))
        .content_type("application/json")
        .send(r#"{"name":"Walk cat"}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated = read_json(&mut resp);
    assert_eq!(updated["name"], "Walk cat");
    assert_eq!(updated["description"], "around the block");
    assert_eq!(updated["priority"], "medium");

    // validation failure surfaces as 422 with the structured body
    let mut resp = agent
        .put(&format!("{base}/todos/1"))
        .content_type("application/json")
        .send(r#"{"name":"no"}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
    assert_eq!(read_json(&mut resp)["error"], "VALIDATION_ERROR");

    // delete returns the removed record
    let mut resp = agent.delete(&format!("{base}/todos/1")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(&mut resp)["name"], "Walk cat");

    // gone afterwards
    let mut resp = agent.get(&format!("{base}/todos/1")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(read_json(&mut resp)["error"], "NOT_FOUND");
}
