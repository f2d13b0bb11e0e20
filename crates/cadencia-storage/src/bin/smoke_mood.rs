use cadencia_core::domain::comment::NewComment;
use cadencia_core::domain::mood::NewMood;
use cadencia_core::domain::song::NewSong;
use cadencia_core::domain::user::NewUser;
use cadencia_core::ports::CatalogRepository;
use cadencia_core::services::CatalogService;
use cadencia_storage::SqliteCatalogRepository;
use cadencia_storage::logging::init_tracing;

fn main() {
  init_tracing();

  // sin argumento se usa la base de `[storage]` en cadencia.toml
  let repo = match std::env::args().nth(1) {
    Some(url) => SqliteCatalogRepository::new(&url),
    None => SqliteCatalogRepository::new_from_config(),
  };
  let service = CatalogService::new(repo.expect("failed to connect"));
  let repo = service.repo();

  let calm = repo.create_mood(&NewMood::new().description("calm").color("#4a90e2")).expect("mood");
  let ana = repo.create_user(&NewUser::new().name("ana")).expect("user");

  let a = repo.create_song(&NewSong::new().name("A").length(201.0).streams(10)).expect("song");
  let b = repo.create_song(&NewSong::new().name("B").length(187.5).streams(3)).expect("song");

  repo.tag_song(a.id, calm.id).expect("tag");
  repo.tag_song(b.id, calm.id).expect("tag");
  repo.like_song(ana.id, a.id).expect("like");
  repo.create_comment(&NewComment::new().comment(5).user_id(ana.id).song_id(a.id)).expect("comment");

  let mood = service.serialize_mood(calm.id).expect("failed to serialize mood");
  println!("{}", serde_json::to_string_pretty(&mood).expect("json"));

  let user = service.serialize_user(ana.id).expect("failed to serialize user");
  println!("{}", serde_json::to_string_pretty(&user).expect("json"));

  repo.delete_user(ana.id).expect("delete user");
  println!("After deleting user: {:?}", service.serialize_song(a.id).expect("song still there"));
}
