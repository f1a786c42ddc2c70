pub mod d100_strategic_optimizer;
