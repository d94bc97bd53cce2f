/*!
# IO utilities

Dataset loading ([reader]) and corpus view saving ([writer]).
!*/
pub mod reader;
pub mod writer;
