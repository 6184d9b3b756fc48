//! Integration tests for deepclone.


mod depth;
mod host;
