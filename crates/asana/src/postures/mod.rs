//! Built-in rule tables, one per posture.

use crate::PostureRule;

mod ananda_balasana;
pub use ananda_balasana::*;

mod ardha_chakrasana;
pub use ardha_chakrasana::*;

mod ardha_padmasana;
pub use ardha_padmasana::*;

mod balasana;
pub use balasana::*;

mod bhujangasana;
pub use bhujangasana::*;

mod dandasana;
pub use dandasana::*;

mod hastauttanasana;
pub use hastauttanasana::*;

mod navasana;
pub use navasana::*;

mod parvatasana;
pub use parvatasana::*;

mod paschimottanasana;
pub use paschimottanasana::*;

mod phalakasana;
pub use phalakasana::*;

mod pranamasana;
pub use pranamasana::*;

mod purvamatsyasana;
pub use purvamatsyasana::*;

mod savasana;
pub use savasana::*;

mod setubandasana;
pub use setubandasana::*;

mod supta_baddha_konasana;
pub use supta_baddha_konasana::*;

mod supta_matsyendrasana;
pub use supta_matsyendrasana::*;

mod svanasana;
pub use svanasana::*;

mod tadasana;
pub use tadasana::*;

mod utkatasana;
pub use utkatasana::*;

mod uttanasana;
pub use uttanasana::*;

mod vajrasana;
pub use vajrasana::*;

mod viparita_karani;
pub use viparita_karani::*;

mod virabhadrasana_i;
pub use virabhadrasana_i::*;

mod virabhadrasana_ii;
pub use virabhadrasana_ii::*;

mod vrksasana;
pub use vrksasana::*;

/// Every built-in posture with its registry identifier.
pub fn catalog() -> Vec<(&'static str, PostureRule)> {
    vec![
        ("PARVATASANA", parvatasana()),
        ("ANANDA_BALASANA", ananda_balasana()),
        ("ARDHA_CHAKRASANA", ardha_chakrasana()),
        ("ARDHA_PADMASANA", ardha_padmasana()),
        ("BHUJANGASANA", bhujangasana()),
        ("HASTAUTTANASANA", hastauttanasana()),
        ("NAVASANA", navasana()),
        ("PHALAKASANA", phalakasana()),
        ("PASCHIMOTTANASANA", paschimottanasana()),
        ("PRANAMASANA", pranamasana()),
        ("PURVAMATSYASANA", purvamatsyasana()),
        ("SAVASANA", savasana()),
        ("SETUBANDASANA", setubandasana()),
        ("SUPTA_BADDHA_KONASANA", supta_baddha_konasana()),
        ("SUPTA_MATSYENDRASANA", supta_matsyendrasana()),
        ("SVANASANA", svanasana()),
        ("UTKATASANA", utkatasana()),
        ("UTTANASANA", uttanasana()),
        ("VIPARITA_KARANI", viparita_karani()),
        ("VAJRASANA", vajrasana()),
        ("VIRABHADRASANA_I", virabhadrasana_i()),
        ("VIRABHADRASANA_II", virabhadrasana_ii()),
        ("VRKSASANA", vrksasana()),
        ("TADASANA", tadasana()),
        ("DANDASANA", dandasana()),
        ("BALASANA", balasana()),
    ]
}
