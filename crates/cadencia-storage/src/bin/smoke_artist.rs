use cadencia_core::domain::album::NewAlbum;
use cadencia_core::domain::artist::NewArtist;
use cadencia_core::domain::song::NewSong;
use cadencia_core::ports::CatalogRepository;
use cadencia_core::services::CatalogService;
use cadencia_storage::SqliteCatalogRepository;
use cadencia_storage::logging::init_tracing;

fn main() {
  init_tracing();

  // primer argumento: ruta de la base; sin él se usa una en memoria
  let url = std::env::args().nth(1).unwrap_or_else(|| ":memory:".to_string());
  let service = CatalogService::new(SqliteCatalogRepository::new(&url).expect("failed to connect"));
  let repo = service.repo();

  let artist = repo.create_artist(&NewArtist::new().name("X")).expect("failed to save artist");
  let album =
    repo.create_album(&NewAlbum::new().name("Y").artist_id(artist.id)).expect("failed to save album");
  let song = repo
    .create_song(&NewSong::new().name("Z").length(3.5).streams(0).album_id(album.id))
    .expect("failed to save song");

  println!("Saved artist {} / album {} / song {}", artist.id, album.id, song.id);

  let doc = service.serialize_artist(artist.id).expect("failed to serialize artist");
  println!("{}", serde_json::to_string_pretty(&doc).expect("json"));

  // sin `length`: tiene que fallar al persistir, no al construir
  let err = repo.create_song(&NewSong::new().name("sin duración").streams(1)).unwrap_err();
  println!("Expected failure: {err}");
}
