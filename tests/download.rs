use berrypull::{download::Downloader, Error};
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    time::{sleep, timeout, Instant},
};

async fn listen() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/media/upload/", listener.local_addr().unwrap());
    (listener, base)
}

fn downloader(base: &str, retries: usize, after: Duration) -> Downloader {
    Downloader::new(
        "http://127.0.0.1:1/wiki/".parse().unwrap(),
        base.parse().unwrap(),
        retries,
        after,
    )
    .unwrap()
}

async fn read_request(stream: &mut TcpStream) {
    let mut buf = [0u8; 4096];
    let _ = stream.read(&mut buf).await.unwrap();
}

#[tokio::test]
async fn dropped_connection_is_retried() {
    let (listener, base) = listen().await;
    let server = tokio::spawn(async move {
        let (first, _) = listener.accept().await.unwrap();
        drop(first);
        let (mut second, _) = listener.accept().await.unwrap();
        read_request(&mut second).await;
        second
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: 4\r\nConnection: close\r\n\r\nDATA",
            )
            .await
            .unwrap();
    });

    let body = downloader(&base, 3, Duration::from_secs(5))
        .fetch_asset("1/1a/TagCheri.png")
        .await
        .unwrap();

    assert_eq!(body, b"DATA");
    server.await.unwrap();
}

#[tokio::test]
async fn retries_run_out() {
    let (listener, base) = listen().await;
    tokio::spawn(async move {
        loop {
            let (stream, _) = listener.accept().await.unwrap();
            drop(stream);
        }
    });

    let err = downloader(&base, 1, Duration::from_secs(5))
        .fetch_asset("1/1a/TagCheri.png")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network { .. }));
}

#[tokio::test]
async fn stalled_body_times_out() {
    let (listener, base) = listen().await;
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: 100000\r\n\r\npartial")
            .await
            .unwrap();
        sleep(Duration::from_secs(30)).await;
        drop(stream);
    });

    let start = Instant::now();
    let result = timeout(
        Duration::from_secs(8),
        downloader(&base, 0, Duration::from_secs(1)).fetch_asset("1/1a/TagCheri.png"),
    )
    .await
    .expect("a stalled body must not outlive the request timeout");

    assert!(matches!(result, Err(Error::Timeout { .. })));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn silent_server_times_out() {
    let (listener, base) = listen().await;
    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        sleep(Duration::from_secs(30)).await;
        drop(stream);
    });

    let result = timeout(
        Duration::from_secs(8),
        downloader(&base, 0, Duration::from_secs(1)).fetch_asset("1/1a/TagCheri.png"),
    )
    .await
    .expect("a silent server must not outlive the request timeout");

    assert!(matches!(
        result,
        Err(Error::Timeout { after, .. }) if after == Duration::from_secs(1)
    ));
}
