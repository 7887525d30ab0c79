pub mod d400_executive;
pub mod d401_reportes;
