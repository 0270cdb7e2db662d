use crate::common::TestServer;

/// Passing on turn flips the turn and leaves the board alone.
#[tokio::test]
async fn pass_on_turn() {
    let server = TestServer::start().await;
    server.play_ok(3, 3, "B").await;
    let (mut sub, before) = server.subscribe().await;

    let reply = server.pass("W").await;
    assert_eq!(reply["accepted"], true);

    let event = sub.recv().await;
    assert_eq!(event["kind"], "pass");
    assert_eq!(event["turn"], "B");
    assert_eq!(event["cells"], before["cells"]);
    assert_eq!(event["message"], "White passed");
}

/// Passing out of turn is ignored: no event, nothing changes.
#[tokio::test]
async fn pass_out_of_turn() {
    let server = TestServer::start().await;
    let (mut sub, _) = server.subscribe().await;

    let reply = server.pass("W").await;
    assert_eq!(reply["accepted"], false);
    sub.expect_silence().await;

    let state = server.state().await;
    assert_eq!(state["turn"], "B");
    assert_eq!(state["seq"], 0);
}

/// Two passes in a row keep the game going.
#[tokio::test]
async fn double_pass_does_not_end_game() {
    let server = TestServer::start().await;
    assert_eq!(server.pass("B").await["accepted"], true);
    assert_eq!(server.pass("W").await["accepted"], true);

    server.play_ok(0, 0, "B").await;
}
