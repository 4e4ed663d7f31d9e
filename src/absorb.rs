//! Feeding buffers of any length into a [`SpongeEngine`].
use crate::error::Result;
use crate::sponge::SpongeEngine;

/// Largest chunk a single [`SpongeEngine::absorb`] call accepts. Engines
/// track the pending input length in a 32-bit counter.
pub const MAX_CHUNK: usize = u32::MAX as usize;

/// Absorb all of `data`, splitting it into chunks of at most [`MAX_CHUNK`]
/// bytes.
///
/// Engine errors are returned as-is and never retried: a failed chunk leaves
/// the engine in an undefined state.
pub fn absorb_all<E: SpongeEngine>(engine: &mut E, data: &[u8]) -> Result<()> {
    absorb_in_chunks(engine, data, MAX_CHUNK)
}

pub(crate) fn absorb_in_chunks<E: SpongeEngine>(
    engine: &mut E,
    mut data: &[u8],
    max_chunk: usize,
) -> Result<()> {
    debug_assert!(max_chunk > 0);
    while data.len() > max_chunk {
        let (chunk, rest) = data.split_at(max_chunk);
        engine.absorb(chunk)?;
        data = rest;
    }
    engine.absorb(data)
}

#[cfg(test)]
mod tests {
    use crate::absorb::{absorb_all, absorb_in_chunks};
    use crate::error::{HashError, Result};
    use crate::sponge::{KeccakSponge, SpongeEngine};
    use crate::variant::Variant;

    /// Records every chunk it is asked to absorb.
    struct Recorder {
        chunks: Vec<Vec<u8>>,
        fail_at: Option<usize>,
    }

    impl SpongeEngine for Recorder {
        fn allocate(_: Variant) -> Result<Self> {
            Ok(Recorder {
                chunks: vec![],
                fail_at: None,
            })
        }

        fn absorb(&mut self, chunk: &[u8]) -> Result<()> {
            if self.fail_at == Some(self.chunks.len()) {
                return Err(HashError::EngineFault("injected".into()));
            }
            self.chunks.push(chunk.to_vec());
            Ok(())
        }

        fn squeeze(&mut self, _: &mut [u8]) -> Result<()> {
            unreachable!()
        }

        fn digest(&self) -> Result<Vec<u8>> {
            unreachable!()
        }

        fn try_clone(&self) -> Result<Self> {
            unreachable!()
        }

        fn block_len(&self) -> usize {
            0
        }

        fn is_extendable(&self) -> bool {
            false
        }

        fn output_len(&self) -> usize {
            0
        }
    }

    #[test]
    fn splits_into_bounded_chunks() {
        let data: Vec<u8> = (0..=255).collect();
        for max_chunk in [1, 7, 100, 255, 256, 1000] {
            let mut recorder = Recorder::allocate(Variant::Sha3_256).unwrap();
            absorb_in_chunks(&mut recorder, &data, max_chunk).unwrap();
            assert!(recorder.chunks.iter().all(|c| c.len() <= max_chunk));
            // every chunk but the last is full
            let (last, full) = recorder.chunks.split_last().unwrap();
            assert!(full.iter().all(|c| c.len() == max_chunk));
            assert!(!last.is_empty());
            assert_eq!(data, recorder.chunks.concat(), "max_chunk {max_chunk}");
        }
    }

    #[test]
    fn empty_input_is_a_single_empty_absorb() {
        let mut recorder = Recorder::allocate(Variant::Sha3_256).unwrap();
        absorb_all(&mut recorder, &[]).unwrap();
        assert_eq!(vec![Vec::<u8>::new()], recorder.chunks);
    }

    #[test]
    fn failure_stops_absorption() {
        let mut recorder = Recorder::allocate(Variant::Sha3_256).unwrap();
        recorder.fail_at = Some(2);
        let err = absorb_in_chunks(&mut recorder, &[1; 10], 3).unwrap_err();
        assert_eq!(HashError::EngineFault("injected".into()), err);
        assert_eq!(2, recorder.chunks.len());
    }

    #[test]
    fn chunking_does_not_change_the_digest() {
        let data: Vec<u8> = (0..1000).map(|i| (i * 7 % 251) as u8).collect();
        let mut whole = KeccakSponge::allocate(Variant::Sha3_512).unwrap();
        absorb_all(&mut whole, &data).unwrap();
        for max_chunk in [1, 13, 72, 73, 999] {
            let mut chunked = KeccakSponge::allocate(Variant::Sha3_512).unwrap();
            absorb_in_chunks(&mut chunked, &data, max_chunk).unwrap();
            assert_eq!(whole.digest().unwrap(), chunked.digest().unwrap());
        }
    }
}
