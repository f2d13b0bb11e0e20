mod common;

use cadencia_core::domain::album::NewAlbum;
use cadencia_core::domain::artist::NewArtist;
use cadencia_core::domain::comment::NewComment;
use cadencia_core::domain::mood::NewMood;
use cadencia_core::domain::song::NewSong;
use cadencia_core::domain::user::NewUser;
use cadencia_core::domain::{AlbumId, ArtistId, MoodId, SongId, UserId};
use cadencia_core::ports::CatalogRepository;
use cadencia_core::services::CatalogService;
use cadencia_core::{ConstraintKind, CoreError};
use cadencia_storage::{CascadeReport, CascadeRoot, SqliteCatalogRepository, StorageConfig};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use common::{album, artist, service, song};

#[test]
fn keys_are_assigned_on_create_and_increase() {
  let svc = service();
  let repo = svc.repo();

  let first = artist(repo, "first");
  let second = artist(repo, "second");

  assert!(second.id > first.id);
  assert_eq!(repo.find_artist(first.id).unwrap().unwrap().name, "first");
}

#[test]
fn missing_optional_text_defaults_to_empty_string() {
  let svc = service();
  let repo = svc.repo();

  let a = repo.create_artist(&NewArtist::new()).unwrap();
  let al = repo.create_album(&NewAlbum::new().artist_id(a.id)).unwrap();
  let m = repo.create_mood(&NewMood::new().color("red")).unwrap();

  assert_eq!(a.name, "");
  assert_eq!(al.name, "");
  assert_eq!(m.description, "");
}

#[test]
fn song_without_length_fails_not_null_at_persist() {
  let svc = service();
  let repo = svc.repo();

  // construir el borrador nunca falla
  let draft = NewSong::new().name("no length").streams(0);

  let err = repo.create_song(&draft).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::NotNull), "unexpected error: {err:?}");
  assert!(repo.list_songs().unwrap().is_empty());
}

#[test]
fn other_required_fields_fail_not_null_too() {
  let svc = service();
  let repo = svc.repo();

  let err = repo.create_user(&NewUser::new()).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::NotNull), "user: {err:?}");

  let err = repo.create_mood(&NewMood::new().description("no color")).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::NotNull), "mood: {err:?}");

  let err = repo.create_album(&NewAlbum::new().name("orphan")).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::NotNull), "album: {err:?}");

  let err = repo.create_comment(&NewComment::new().comment(1)).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::NotNull), "comment: {err:?}");
}

#[test]
fn dangling_foreign_keys_are_rejected() {
  let svc = service();
  let repo = svc.repo();

  let err = repo.create_album(&NewAlbum::new().name("Y").artist_id(ArtistId::from_raw(99))).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::ForeignKey), "album: {err:?}");

  let s = song(repo, None, "loose", 1.0, 0);
  let err = repo.tag_song(s.id, MoodId::from_raw(42)).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::ForeignKey), "tag: {err:?}");

  let err = repo
    .create_comment(&NewComment::new().comment(3).user_id(UserId::from_raw(7)).song_id(s.id))
    .unwrap_err();
  assert!(err.is_constraint(ConstraintKind::ForeignKey), "comment: {err:?}");
}

#[test]
fn songs_may_live_outside_any_album() {
  let svc = service();
  let repo = svc.repo();

  let s = song(repo, None, "single", 2.5, 12);
  assert_eq!(s.album_id, None);
  assert_eq!(repo.find_song(s.id).unwrap(), Some(s));
}

#[test]
fn entities_are_mutated_in_place_and_saved() {
  let svc = service();
  let repo = svc.repo();

  let a = artist(repo, "X");
  let al = album(repo, &a, "Y");
  let mut s = song(repo, Some(&al), "Z", 3.5, 0);

  s.streams += 10;
  s.name = "Z (remaster)".into();
  s.album_id = None;
  repo.update_song(&s).unwrap();

  let stored = repo.find_song(s.id).unwrap().unwrap();
  assert_eq!(stored.streams, 10);
  assert_eq!(stored.name, "Z (remaster)");
  assert_eq!(stored.album_id, None);
  assert!(repo.songs_of_album(al.id).unwrap().is_empty());
}

#[test]
fn comments_moods_and_users_are_saved_after_mutation() {
  let svc = service();
  let repo = svc.repo();

  let s = song(repo, None, "s", 1.0, 0);
  let mut u = repo.create_user(&NewUser::new().name("ana")).unwrap();
  let other = repo.create_user(&NewUser::new().name("eve")).unwrap();
  let mut c = repo.create_comment(&NewComment::new().comment(1).user_id(u.id).song_id(s.id)).unwrap();
  let mut m = repo.create_mood(&NewMood::new().description("calm").color("blue")).unwrap();

  c.user_comment = 5;
  c.user_id = other.id;
  repo.update_comment(&c).unwrap();
  m.description = "storm".into();
  m.color = "grey".into();
  repo.update_mood(&m).unwrap();
  u.name = "ana maría".into();
  repo.update_user(&u).unwrap();

  assert_eq!(svc.get_comment(c.id).unwrap(), Some(c.clone()));
  assert_eq!(svc.get_mood(m.id).unwrap(), Some(m));
  assert_eq!(svc.get_user(u.id).unwrap(), Some(u.clone()));
  assert!(repo.comments_of_user(u.id).unwrap().is_empty());
  assert_eq!(repo.comments_of_user(other.id).unwrap(), vec![c]);
}

#[test]
fn deleting_a_comment_only_removes_that_row() {
  let svc = service();
  let repo = svc.repo();

  let s = song(repo, None, "s", 1.0, 0);
  let u = repo.create_user(&NewUser::new().name("ana")).unwrap();
  let gone = repo.create_comment(&NewComment::new().comment(1).user_id(u.id).song_id(s.id)).unwrap();
  let kept = repo.create_comment(&NewComment::new().comment(2).user_id(u.id).song_id(s.id)).unwrap();

  repo.delete_comment(gone.id).unwrap();

  assert_eq!(repo.comments_of_song(s.id).unwrap(), vec![kept]);
  assert!(svc.get_user(u.id).unwrap().is_some());
  assert!(svc.get_song(s.id).unwrap().is_some());

  let err = repo.delete_comment(gone.id).unwrap_err();
  assert!(matches!(err, CoreError::NotFound { entity: "comment", .. }), "{err:?}");
  let err = repo.delete_mood(MoodId::from_raw(99)).unwrap_err();
  assert!(matches!(err, CoreError::NotFound { entity: "mood", id: 99 }), "{err:?}");
}

#[test]
fn listings_come_back_in_key_order() {
  let svc = service();
  let repo = svc.repo();

  let a = artist(repo, "X");
  let b = artist(repo, "Y");
  let albums = vec![album(repo, &b, "b1"), album(repo, &a, "a1"), album(repo, &b, "b2")];
  let moods: Vec<_> = ["one", "two", "three"]
    .into_iter()
    .map(|d| repo.create_mood(&NewMood::new().description(d).color("c")).unwrap())
    .collect();
  let users: Vec<_> =
    ["zoe", "ana", "max"].into_iter().map(|n| repo.create_user(&NewUser::new().name(n)).unwrap()).collect();

  assert_eq!(repo.list_artists().unwrap(), vec![a, b]);
  assert_eq!(repo.list_albums().unwrap(), albums);
  assert_eq!(repo.list_moods().unwrap(), moods);
  assert_eq!(repo.list_users().unwrap(), users);
}

#[test]
fn nan_length_is_a_check_violation() {
  let svc = service();
  let repo = svc.repo();

  let err = repo.create_song(&NewSong::new().name("nan").length(f64::NAN).streams(0)).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::Check), "create: {err:?}");
  assert!(repo.list_songs().unwrap().is_empty());

  let mut s = song(repo, None, "ok", 1.0, 0);
  s.length = f64::NAN;
  let err = repo.update_song(&s).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::Check), "update: {err:?}");
  assert_eq!(repo.find_song(s.id).unwrap().unwrap().length, 1.0);
}

#[test]
fn updating_a_missing_entity_is_not_found() {
  let svc = service();
  let repo = svc.repo();

  let mut ghost = artist(repo, "ghost");
  repo.delete_artist(ghost.id).unwrap();
  ghost.name = "back".into();

  let err = repo.update_artist(&ghost).unwrap_err();
  assert!(matches!(err, CoreError::NotFound { entity: "artist", .. }), "{err:?}");
}

#[test]
fn moving_an_album_to_a_missing_artist_is_rejected() {
  let svc = service();
  let repo = svc.repo();

  let a = artist(repo, "X");
  let mut al = album(repo, &a, "Y");
  al.artist_id = ArtistId::from_raw(1234);

  let err = repo.update_album(&al).unwrap_err();
  assert!(err.is_constraint(ConstraintKind::ForeignKey), "{err:?}");
}

#[test]
fn deleting_an_artist_cascades_down_to_comments() {
  let svc = service();
  let repo = svc.repo();

  let a = artist(repo, "X");
  let other = artist(repo, "other");
  let al1 = album(repo, &a, "one");
  let al2 = album(repo, &a, "two");
  let kept_album = album(repo, &other, "kept");

  let s1 = song(repo, Some(&al1), "s1", 1.0, 0);
  let s2 = song(repo, Some(&al2), "s2", 2.0, 0);
  let kept_song = song(repo, Some(&kept_album), "kept", 3.0, 0);

  let u = repo.create_user(&NewUser::new().name("ana")).unwrap();
  let m = repo.create_mood(&NewMood::new().description("calm").color("blue")).unwrap();
  let c1 = repo.create_comment(&NewComment::new().comment(1).user_id(u.id).song_id(s1.id)).unwrap();
  let c2 = repo.create_comment(&NewComment::new().comment(2).user_id(u.id).song_id(s2.id)).unwrap();
  let kept_comment =
    repo.create_comment(&NewComment::new().comment(3).user_id(u.id).song_id(kept_song.id)).unwrap();
  repo.tag_song(s1.id, m.id).unwrap();
  repo.tag_song(kept_song.id, m.id).unwrap();
  repo.like_song(u.id, s2.id).unwrap();

  repo.delete_artist(a.id).unwrap();

  assert_eq!(repo.find_artist(a.id).unwrap(), None);
  assert_eq!(repo.find_album(al1.id).unwrap(), None);
  assert_eq!(repo.find_album(al2.id).unwrap(), None);
  assert_eq!(repo.find_song(s1.id).unwrap(), None);
  assert_eq!(repo.find_song(s2.id).unwrap(), None);
  assert_eq!(repo.find_comment(c1.id).unwrap(), None);
  assert_eq!(repo.find_comment(c2.id).unwrap(), None);

  // etiquetas y likes de las canciones borradas desaparecen; moods y usuarios no
  assert_eq!(repo.songs_of_mood(m.id).unwrap(), vec![kept_song.clone()]);
  assert!(repo.liked_songs_of_user(u.id).unwrap().is_empty());
  assert!(repo.find_mood(m.id).unwrap().is_some());
  assert!(repo.find_user(u.id).unwrap().is_some());

  // lo que no cuelga del artista queda intacto
  assert!(repo.find_album(kept_album.id).unwrap().is_some());
  assert!(repo.find_comment(kept_comment.id).unwrap().is_some());
}

#[test]
fn deleting_a_user_removes_comments_but_keeps_liked_songs() {
  let svc = service();
  let repo = svc.repo();

  let s = song(repo, None, "liked", 3.0, 100);
  let u = repo.create_user(&NewUser::new().name("bob")).unwrap();
  let other = repo.create_user(&NewUser::new().name("eve")).unwrap();
  repo.like_song(u.id, s.id).unwrap();
  repo.like_song(other.id, s.id).unwrap();
  repo.create_comment(&NewComment::new().comment(10).user_id(u.id).song_id(s.id)).unwrap();
  let survivor = repo.create_comment(&NewComment::new().comment(11).user_id(other.id).song_id(s.id)).unwrap();

  repo.delete_user(u.id).unwrap();

  assert_eq!(repo.find_user(u.id).unwrap(), None);
  assert!(repo.comments_of_user(u.id).unwrap().is_empty());
  assert_eq!(repo.find_song(s.id).unwrap(), Some(s.clone()));
  assert_eq!(repo.comments_of_song(s.id).unwrap(), vec![survivor]);
  assert_eq!(repo.likers_of_song(s.id).unwrap(), vec![other]);
}

#[test]
fn deleting_a_mood_only_drops_its_tags() {
  let svc = service();
  let repo = svc.repo();

  let s = song(repo, None, "tagged", 1.0, 0);
  let m = repo.create_mood(&NewMood::new().description("dark").color("black")).unwrap();
  repo.tag_song(s.id, m.id).unwrap();

  repo.delete_mood(m.id).unwrap();

  assert!(repo.find_song(s.id).unwrap().is_some());
  assert!(repo.moods_of_song(s.id).unwrap().is_empty());
}

#[test]
fn cascade_report_counts_every_removed_row() {
  let svc = service();
  let repo = svc.repo();

  let a = artist(repo, "X");
  let al = album(repo, &a, "Y");
  let s1 = song(repo, Some(&al), "s1", 1.0, 0);
  let s2 = song(repo, Some(&al), "s2", 1.0, 0);
  let u = repo.create_user(&NewUser::new().name("ana")).unwrap();
  let m = repo.create_mood(&NewMood::new().description("calm").color("blue")).unwrap();
  repo.create_comment(&NewComment::new().comment(1).user_id(u.id).song_id(s1.id)).unwrap();
  repo.create_comment(&NewComment::new().comment(2).user_id(u.id).song_id(s2.id)).unwrap();
  repo.tag_song(s1.id, m.id).unwrap();
  repo.like_song(u.id, s1.id).unwrap();
  repo.like_song(u.id, s2.id).unwrap();

  let report = repo.delete_cascade(CascadeRoot::Artist(a.id)).unwrap();

  assert_eq!(
    report,
    CascadeReport { artists: 1, albums: 1, songs: 2, comments: 2, mood_tags: 1, likes: 2, ..Default::default() }
  );
  assert!(matches!(repo.delete_cascade(CascadeRoot::Artist(a.id)), Err(CoreError::NotFound { entity: "artist", .. })));
}

#[test]
fn deleting_a_missing_entity_is_not_found() {
  let svc = service();
  let repo = svc.repo();

  assert!(matches!(repo.delete_song(SongId::from_raw(5)), Err(CoreError::NotFound { entity: "song", id: 5 })));
  assert!(matches!(repo.delete_album(AlbumId::from_raw(5)), Err(CoreError::NotFound { entity: "album", .. })));
  assert!(matches!(repo.delete_user(UserId::from_raw(5)), Err(CoreError::NotFound { entity: "user", .. })));
}

#[test]
fn tagging_and_liking_are_idempotent_and_reversible() {
  let svc = service();
  let repo = svc.repo();

  let s = song(repo, None, "s", 1.0, 0);
  let m = repo.create_mood(&NewMood::new().description("happy").color("yellow")).unwrap();
  let u = repo.create_user(&NewUser::new().name("ana")).unwrap();

  repo.tag_song(s.id, m.id).unwrap();
  repo.tag_song(s.id, m.id).unwrap();
  repo.like_song(u.id, s.id).unwrap();
  repo.like_song(u.id, s.id).unwrap();

  assert_eq!(repo.moods_of_song(s.id).unwrap(), vec![m.clone()]);
  assert_eq!(repo.liked_songs_of_user(u.id).unwrap(), vec![s.clone()]);

  repo.untag_song(s.id, m.id).unwrap();
  repo.unlike_song(u.id, s.id).unwrap();
  repo.unlike_song(u.id, s.id).unwrap();

  assert!(repo.moods_of_song(s.id).unwrap().is_empty());
  assert!(repo.likers_of_song(s.id).unwrap().is_empty());
}

#[test]
fn file_database_survives_reopening() {
  let tmp = tempfile::tempdir().unwrap();
  let cfg = StorageConfig { db_path: tmp.path().join("nested").join("catalog.db"), journal_mode: Some("WAL".into()) };

  let id = {
    let repo = SqliteCatalogRepository::with_config(&cfg).unwrap();
    repo.create_artist(&NewArtist::new().name("persisted")).unwrap().id
  };

  let repo = SqliteCatalogRepository::with_config(&cfg).unwrap();
  assert_eq!(repo.find_artist(id).unwrap().unwrap().name, "persisted");
}

#[test]
fn invalid_journal_mode_is_rejected() {
  let tmp = tempfile::tempdir().unwrap();
  let cfg = StorageConfig { db_path: tmp.path().join("c.db"), journal_mode: Some("WAL; DROP".into()) };

  assert!(matches!(SqliteCatalogRepository::with_config(&cfg), Err(CoreError::Repository(_))));
}

#[test]
fn keys_beyond_32_bits_load_and_serialize() {
  let tmp = tempfile::tempdir().unwrap();
  let cfg = StorageConfig { db_path: tmp.path().join("big.db"), journal_mode: None };
  let svc = CatalogService::new(SqliteCatalogRepository::with_config(&cfg).unwrap());
  let repo = svc.repo();

  artist(repo, "seed");
  let mut conn = SqliteConnection::establish(&cfg.database_url()).unwrap();
  conn.batch_execute("UPDATE sqlite_sequence SET seq = 3000000000 WHERE name = 'artists';").unwrap();

  let big = artist(repo, "big");
  let al = album(repo, &big, "Y");

  assert_eq!(big.id.as_raw(), 3_000_000_001);
  assert_eq!(repo.find_album(al.id).unwrap().unwrap().artist_id, big.id);
  assert_eq!(svc.serialize_artist(big.id).unwrap().id, big.id);
}
