//! Static file server for the blog client
//!
//! Serves the compiled WASM bundle from the dist/ directory. Unknown paths
//! fall back to index.html so client-side routes survive a hard reload.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("Blog client server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (path, _query) = match full_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (full_path, None),
    };

    // Map the request to a file under dist/; directories and unknown paths
    // get index.html so client-side routing keeps working
    let file_path = if path == "/" || path.is_empty() {
        PathBuf::from("dist/index.html")
    } else {
        let mut dist_path = PathBuf::from("dist");
        dist_path.push(path.strip_prefix('/').unwrap_or(path));
        if dist_path.is_dir() || !dist_path.exists() {
            PathBuf::from("dist/index.html")
        } else {
            dist_path
        }
    };

    let content_type = match file_path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    };

    let (status_line, body, content_type) = match fs::read(&file_path) {
        Ok(contents) => ("HTTP/1.1 200 OK", contents, content_type),
        Err(_) => {
            eprintln!("File not found: {}", file_path.display());
            (
                "HTTP/1.1 404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Error: File not found</h1></body></html>"
                    .to_vec(),
                "text/html",
            )
        }
    };

    let headers = format!(
        "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status_line,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }
    let _ = stream.flush();
}
