//! ISAAC32 transition function
//!
//! One call advances the state by exactly one step and returns one word.
//! Each step touches the accumulator, the result word, the cycle position
//! and exactly one pool entry; the counter only moves on cycle boundaries.

use super::state::{ACCUMULATOR, COUNTER, CYCLE_POSITION, Isaac32, POOL_WORDS, RESULT};

impl Isaac32 {
    /// Advances the generator by one step and returns the produced word.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let w = &mut self.words;
        let i = (w[CYCLE_POSITION] & 0xff) as usize;

        // Cycle boundary: inject the counter into the result once per 256 steps.
        if i == 0 {
            w[COUNTER] = w[COUNTER].wrapping_add(1);
            w[RESULT] = w[RESULT].wrapping_add(w[COUNTER]);
        }

        let feedback = w[i];

        let mut a = w[ACCUMULATOR];
        a ^= match i % 4 {
            0 => a << 13,
            1 => a >> 6,
            2 => a << 2,
            _ => a >> 16,
        };
        a = w[(i + 128) % POOL_WORDS].wrapping_add(a);

        let y = w[(feedback >> 2) as usize % POOL_WORDS]
            .wrapping_add(a)
            .wrapping_add(w[RESULT]);
        w[i] = y;

        let b = w[(y >> 10) as usize % POOL_WORDS].wrapping_add(feedback);

        w[ACCUMULATOR] = a;
        w[RESULT] = b;
        w[CYCLE_POSITION] = ((i + 1) % POOL_WORDS) as u32;

        b
    }

    /// Advances the generator by `count` steps, discarding the output.
    pub fn discard(&mut self, count: usize) {
        for _ in 0..count {
            self.next_u32();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_seed_first_words() {
        let mut rng = Isaac32::new();
        let words: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(words, [0xe76d_d339, 0xd91a_a738, 0xd329_56e5, 0xa264_e933]);
    }

    #[test]
    fn seeded_first_words() {
        let mut rng = Isaac32::from_seed(b"swordfish");
        let words: Vec<u32> = (0..8).map(|_| rng.next_u32()).collect();
        assert_eq!(
            words,
            [
                0xa58b_b3af, 0x5b20_e45a, 0xe940_2c72, 0x169f_8bb9, 0x73b2_5cc1, 0x2884_9538,
                0x88e5_79ad, 0xf128_be37,
            ]
        );
    }

    #[test]
    fn output_is_stored_as_result() {
        let mut rng = Isaac32::from_seed(b"result");
        let out = rng.next_u32();
        assert_eq!(rng.as_words()[RESULT], out);
    }

    #[test]
    fn counter_moves_once_per_cycle() {
        let mut rng = Isaac32::new();
        assert_eq!(rng.cycles(), 0);

        rng.next_u32();
        assert_eq!(rng.cycles(), 1);

        rng.discard(255);
        assert_eq!(rng.cycles(), 1);
        assert_eq!(rng.position(), 0);

        rng.next_u32();
        assert_eq!(rng.cycles(), 2);
        assert_eq!(rng.position(), 1);
    }

    #[test]
    fn step_mutates_single_pool_entry() {
        let mut rng = Isaac32::from_seed(b"one entry");
        rng.discard(5);
        let before = rng.clone();
        rng.next_u32();

        let changed: Vec<usize> = (0..POOL_WORDS)
            .filter(|&k| rng.as_words()[k] != before.as_words()[k])
            .collect();
        assert!(changed.len() <= 1);
        assert!(changed.iter().all(|&k| k == 5));
    }

    #[test]
    fn all_zero_state_still_produces_output() {
        let mut rng = Isaac32::zeroed();
        let words: Vec<u32> = (0..512).map(|_| rng.next_u32()).collect();
        assert!(words.iter().any(|&w| w != 0));
    }
}
