mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use peer_ban_wave::ban::structs::ban_metadata::BanMetadata;
use peer_ban_wave::downloader::enums::downloader_last_status::DownloaderLastStatus;
use peer_ban_wave::downloader::traits::downloader::Downloader;
use peer_ban_wave::torrent::structs::peer::Peer;
use common::{FakeDownloader, LoginBehaviour, MockClient};

#[tokio::test]
async fn test_ban_wave_bans_pushes_and_expires() {
    let mut config = common::create_test_config();
    config.ban_duration = 300;
    let mut unfinished = common::cheating_peer(9);
    unfinished.peer_id = String::new();
    let downloader = Arc::new(FakeDownloader::new("qbittorrent")
        .with_torrent(common::torrent("1"), vec![common::cheating_peer(1), common::honest_peer(2), unfinished]));
    let (server, metrics) = common::create_test_server(config, vec![downloader.clone()]);

    server.ban_wave().await;

    let banned = server.get_banned_peers();
    assert_eq!(banned.len(), 1);
    let metadata = banned.get(&common::address(1, 6881)).unwrap();
    assert_eq!(metadata.context(), "Progress Cheat Blocker");
    assert_eq!(metadata.unban_at() - metadata.ban_at(), 300);
    assert_eq!(metadata.torrent().id, "1");
    assert_eq!(downloader.last_ban_list(), Some(vec![common::address(1, 6881)]));
    assert_eq!(downloader.last_relaunch(), Some(vec![common::torrent("1")]));
    assert_eq!(downloader.last_status(), DownloaderLastStatus::Healthy);

    downloader.set_peers("1", vec![common::honest_peer(2)]);
    server.ban_wave().await;
    assert_eq!(downloader.ban_lists.lock().len(), 1, "nothing changed, nothing pushed");
    assert!(server.ban_list.contains(&common::address(1, 6881)));

    tokio::time::sleep(Duration::from_millis(400)).await;
    server.ban_wave().await;
    assert!(server.get_banned_peers().is_empty());
    assert_eq!(downloader.last_ban_list(), Some(vec![]));
    assert_eq!(downloader.last_relaunch(), Some(vec![]));

    let stats = metrics.get_stats();
    assert_eq!(stats.checks, 3);
    assert_eq!(stats.bans, 1);
    assert_eq!(stats.unbans, 1);
}

#[tokio::test]
async fn test_live_bans_stay_in_later_push_backs() {
    let downloader = Arc::new(FakeDownloader::new("qbittorrent")
        .with_torrent(common::torrent("1"), vec![common::cheating_peer(1)]));
    let (server, metrics) = common::create_test_server(common::create_test_config(), vec![downloader.clone()]);

    server.ban_wave().await;
    assert_eq!(downloader.last_ban_list(), Some(vec![common::address(1, 6881)]));

    downloader.set_peers("1", vec![common::cheating_peer(2), common::honest_peer(3)]);
    server.ban_wave().await;

    assert_eq!(downloader.ban_lists.lock().len(), 2);
    assert_eq!(downloader.last_ban_list(), Some(vec![common::address(1, 6881), common::address(2, 6881)]));
    assert_eq!(downloader.last_relaunch(), Some(vec![common::torrent("1")]));
    assert_eq!(server.get_banned_peers().len(), 2);

    let stats = metrics.get_stats();
    assert_eq!(stats.checks, 2);
    assert_eq!(stats.bans, 2);
    assert_eq!(stats.unbans, 0);
}

#[tokio::test]
async fn test_range_ban_follows_an_earlier_ban() {
    let mut config = common::create_test_config();
    config.modules.auto_range_ban.enabled = true;
    let downloader = Arc::new(FakeDownloader::new("qbittorrent")
        .with_torrent(common::torrent("1"), vec![common::cheating_peer(1)]));
    let (server, _) = common::create_test_server(config, vec![downloader.clone()]);

    server.ban_wave().await;
    downloader.set_peers("1", vec![common::honest_peer(2)]);
    server.ban_wave().await;

    let banned = server.get_banned_peers();
    assert_eq!(banned.get(&common::address(2, 51413)).unwrap().context(), "Auto Range Ban");
    assert_eq!(downloader.last_ban_list(), Some(vec![common::address(1, 6881), common::address(2, 51413)]));
}

#[tokio::test]
async fn test_peer_claiming_more_than_uploaded_is_not_banned() {
    let peer = Peer::new(common::address(3, 6881), "-XL0019-abcdefghijkl", "Xunlei 0.0.1.9", 0.9, 0, 0);
    let downloader = Arc::new(FakeDownloader::new("transmission").with_torrent(common::torrent("1"), vec![peer]));
    let (server, metrics) = common::create_test_server(common::create_test_config(), vec![downloader.clone()]);

    server.ban_wave().await;

    assert!(server.get_banned_peers().is_empty());
    assert!(downloader.ban_lists.lock().is_empty());
    assert_eq!(metrics.get_stats().checks, 1);
}

#[tokio::test]
async fn test_refused_login_aborts_the_tick() {
    let mut refusing = MockClient::new();
    refusing.expect_name().return_const(String::from("refusing"));
    refusing.expect_endpoint().return_const(String::from("http://127.0.0.1:9091"));
    refusing.expect_login().times(1).returning(|| Ok(false));
    refusing.expect_set_last_status().withf(|status| *status == DownloaderLastStatus::Healthy).times(1).return_const(());
    refusing.expect_set_last_status().withf(|status| *status == DownloaderLastStatus::Error).times(1).return_const(());
    refusing.expect_get_torrents().times(0);
    refusing.expect_set_ban_list().times(0);
    refusing.expect_relaunch_torrent_if_needed().times(0);

    let second = Arc::new(FakeDownloader::new("second").with_torrent(common::torrent("1"), vec![common::cheating_peer(1)]));
    let downloaders: Vec<Arc<dyn Downloader>> = vec![Arc::new(refusing), second.clone()];
    let (server, metrics) = common::create_test_server(common::create_test_config(), downloaders);

    let expired = common::address(7, 7);
    let metadata = BanMetadata::new("IP Blacklist", 0, 1, common::torrent("9"), common::honest_peer(7), "manual").unwrap();
    server.ban_peer(expired, metadata);

    server.ban_wave().await;

    assert_eq!(second.logins.load(Ordering::SeqCst), 0);
    assert!(second.ban_lists.lock().is_empty());
    assert!(server.ban_list.contains(&expired), "expiry sweep skipped");
    assert_eq!(metrics.get_stats().checks, 1);
}

#[tokio::test]
async fn test_login_error_only_skips_that_downloader() {
    let failing = Arc::new(FakeDownloader::new("failing")
        .with_login(LoginBehaviour::Fail)
        .with_torrent(common::torrent("1"), vec![common::cheating_peer(1)]));
    let healthy = Arc::new(FakeDownloader::new("healthy").with_torrent(common::torrent("2"), vec![common::cheating_peer(2)]));
    let downloaders: Vec<Arc<dyn Downloader>> = vec![failing.clone(), healthy.clone()];
    let (server, _) = common::create_test_server(common::create_test_config(), downloaders);

    server.ban_wave().await;

    assert_eq!(failing.last_status(), DownloaderLastStatus::Error);
    assert_eq!(healthy.last_status(), DownloaderLastStatus::Healthy);
    assert!(!server.ban_list.contains(&common::address(1, 6881)));
    assert!(server.ban_list.contains(&common::address(2, 6881)));
    assert!(failing.ban_lists.lock().is_empty());
    assert_eq!(healthy.last_ban_list(), Some(vec![common::address(2, 6881)]));
}

#[tokio::test]
async fn test_failed_peer_fetch_fails_the_downloader() {
    let broken = Arc::new(FakeDownloader::new("broken")
        .with_torrent(common::torrent("1"), vec![common::cheating_peer(1)])
        .with_torrent(common::torrent("2"), vec![]));
    *broken.failing_torrent.lock() = Some(String::from("2"));
    let healthy = Arc::new(FakeDownloader::new("healthy").with_torrent(common::torrent("3"), vec![common::cheating_peer(3)]));
    let downloaders: Vec<Arc<dyn Downloader>> = vec![broken.clone(), healthy.clone()];
    let (server, _) = common::create_test_server(common::create_test_config(), downloaders);

    let result = server.ban_downloader(broken.clone()).await;
    assert!(result.is_err());
    assert!(server.get_banned_peers().is_empty());

    server.ban_wave().await;
    assert_eq!(broken.last_status(), DownloaderLastStatus::Error);
    assert_eq!(healthy.last_status(), DownloaderLastStatus::Healthy);
    assert_eq!(server.get_banned_peers().len(), 1);
    assert_eq!(broken.last_ban_list(), Some(vec![common::address(3, 6881)]));
}

#[tokio::test]
async fn test_every_downloader_receives_the_full_list() {
    let contributing = Arc::new(FakeDownloader::new("contributing")
        .with_torrent(common::torrent("1"), vec![common::cheating_peer(1), common::cheating_peer(2)])
        .with_torrent(common::torrent("2"), vec![common::honest_peer(3)]));
    let quiet = Arc::new(FakeDownloader::new("quiet").with_torrent(common::torrent("5"), vec![common::honest_peer(4)]));
    let downloaders: Vec<Arc<dyn Downloader>> = vec![contributing.clone(), quiet.clone()];
    let (server, _) = common::create_test_server(common::create_test_config(), downloaders);

    server.ban_wave().await;

    let expected = vec![common::address(1, 6881), common::address(2, 6881)];
    assert_eq!(contributing.last_ban_list(), Some(expected.clone()));
    assert_eq!(quiet.last_ban_list(), Some(expected));
    assert_eq!(contributing.last_relaunch(), Some(vec![common::torrent("1")]));
    assert_eq!(quiet.last_relaunch(), Some(vec![]));
}

#[tokio::test]
async fn test_ban_downloader_reports_changes() {
    let downloader = Arc::new(FakeDownloader::new("qbittorrent").with_torrent(common::torrent("1"), vec![common::honest_peer(1)]));
    let (server, _) = common::create_test_server(common::create_test_config(), vec![downloader.clone()]);

    let (changed, relaunch) = server.ban_downloader(downloader.clone()).await.unwrap();
    assert!(!changed);
    assert!(relaunch.is_empty());

    downloader.set_peers("1", vec![common::cheating_peer(1)]);
    let (changed, relaunch) = server.ban_downloader(downloader.clone()).await.unwrap();
    assert!(changed);
    assert_eq!(relaunch, vec![common::torrent("1")]);
}

#[tokio::test]
async fn test_shutdown_closes_downloaders() {
    let downloader = Arc::new(FakeDownloader::new("qbittorrent"));
    let (server, _) = common::create_test_server(common::create_test_config(), vec![downloader.clone()]);
    server.shutdown().await;
    assert!(downloader.closed.load(Ordering::SeqCst));
}
