//! Basic parser and datastructures for known answer tests.
#![allow(dead_code)]

use std::{fs, path::Path};

use sha3_hashobj::HashObject;

pub struct KatSet {
    /// Name of the section parameter, e.g. `L` or `Outputlen`
    pub param: String,
    /// Value of the section parameter in bits
    pub length: usize,
    pub tests: Vec<Test>,
}

pub struct Test {
    pub len: usize,
    pub msg: Vec<u8>,
    /// Output length in bits
    pub output_len: usize,
    pub digest: String,
}

impl KatSet {
    pub fn load(path: &Path) -> Self {
        let content = fs::read_to_string(path).expect("unable to read test file");
        Self::parse(&content)
    }

    fn parse(inp: &str) -> Self {
        let mut lines = inp
            .lines()
            .filter(|line| !(line.starts_with('#') || line.is_empty()));

        let header = lines
            .next()
            .expect("empty file")
            .strip_prefix('[')
            .and_then(|line| line.strip_suffix(']'))
            .expect("missing section header");
        let (param, length) = header.split_once(" = ").expect("malformed header");
        let length: usize = length.parse().expect("header can't be parsed as usize");

        let mut tests: Vec<Test> = vec![];
        for line in lines {
            let (key, value) = line.split_once(" = ").expect("malformed line");
            if key == "Len" {
                let len: usize = value.parse().expect("unable to parse Len");
                assert_eq!(0, len % 8);
                tests.push(Test {
                    len,
                    msg: vec![],
                    output_len: length,
                    digest: String::new(),
                });
                continue;
            }
            let test = tests.last_mut().expect("field before Len");
            match key {
                "Outputlen" => {
                    test.output_len = value.parse().expect("unable to parse Outputlen")
                }
                "Msg" => {
                    test.msg = hex::decode(value).expect("unable to decode msg");
                    test.msg.truncate(test.len / 8);
                }
                "MD" | "Output" => test.digest = value.to_owned(),
                other => panic!("unknown field {other}"),
            }
        }
        KatSet {
            param: param.to_owned(),
            length,
            tests,
        }
    }
}

/// Hash `msg` by feeding it to `hasher` in pieces of `piece` bytes.
pub fn update_in_pieces(hasher: &HashObject, msg: &[u8], piece: usize) {
    for chunk in msg.chunks(piece) {
        hasher.update(chunk).expect("update failed");
    }
}
