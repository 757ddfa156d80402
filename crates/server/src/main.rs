use std::io::{Cursor, Read};
use std::sync::{Arc, Mutex};
use std::thread;

use serde::Serialize;
use tiny_http::{Header, Method, Response, Server, StatusCode};

use tutor::Tutor;

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

const MISSING_MESSAGE: ErrorResponse = ErrorResponse {
    error: "Missing message",
};

/// Pull the `message` string out of a JSON request body. `None` covers
/// unparseable bodies, an absent field, and non-string values alike.
fn parse_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
}

fn json_response(body: String, status: u16) -> Response<Cursor<Vec<u8>>> {
    let mut response = Response::from_string(body).with_status_code(StatusCode(status));
    if let Ok(h) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response.add_header(h);
    }
    if let Ok(h) = Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..]) {
        response.add_header(h);
    }
    response
}

fn main() -> std::io::Result<()> {
    let addr = std::env::var("TUTOR_ADDR").unwrap_or_else(|_| "0.0.0.0:3030".to_string());

    // Shared session: the pipeline is stateless, the lock only
    // serializes the fallback responder's RNG.
    let tutor = Arc::new(Mutex::new(Tutor::new()));

    let server = match Server::http(&addr) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to bind server: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("server bind error: {}", e),
            ));
        }
    };
    println!("Server running on http://{}", addr);

    for request in server.incoming_requests() {
        let tutor = tutor.clone();
        let mut req = request;
        // Spawn a thread per request to keep responsiveness
        thread::spawn(move || {
            let url = req.url().to_string();
            let method = req.method().clone();

            // simple health
            if method == Method::Get && url == "/health" {
                let mut response = Response::from_string("OK");
                if let Ok(h) = Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..]) {
                    response.add_header(h);
                }
                let _ = req.respond(response);
                return;
            }

            if method == Method::Post && url == "/chat" {
                let mut content = String::new();
                let message = match req.as_reader().read_to_string(&mut content) {
                    Ok(_) => parse_message(&content),
                    Err(_) => None,
                };
                let (body, status) = match message {
                    Some(message) => {
                        let reply = {
                            let mut tutor = match tutor.lock() {
                                Ok(t) => t,
                                Err(poisoned) => poisoned.into_inner(),
                            };
                            tutor.reply(&message)
                        };
                        (serde_json::to_string(&ChatResponse { reply }), 200)
                    }
                    None => (serde_json::to_string(&MISSING_MESSAGE), 400),
                };
                match body {
                    Ok(body) => {
                        let _ = req.respond(json_response(body, status));
                    }
                    Err(_) => {
                        let _ = req.respond(
                            Response::from_string("Internal Server Error")
                                .with_status_code(StatusCode(500)),
                        );
                    }
                }
                return;
            }

            // unsupported
            let _ = req.respond(
                Response::from_string("Not Found").with_status_code(StatusCode(404)),
            );
        });
    }

    Ok(())
}
