use rand::seq::SliceRandom;

/// Pins the calling thread to core 2 if the machine has one, which makes timings more repeatable.
pub fn pin_thread_to_core() {
    const CORE_INDEX: usize = 2;

    let core = core_affinity::get_core_ids().and_then(|ids| ids.get(CORE_INDEX).copied());
    if let Some(core) = core {
        core_affinity::set_for_current(core);
    }
}

/// Splits `len` into a part of `percent_a` percent and the rest.
pub fn split_len(len: usize, percent_a: f64) -> (usize, usize) {
    let len_a = ((len as f64) * percent_a / 100.0).round() as usize;
    (len_a, len - len_a)
}

pub fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    v.shuffle(&mut rand::thread_rng());
    v
}
