pub mod game_room;
