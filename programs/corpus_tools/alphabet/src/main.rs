use term_macros::*;
mod error;
mod normalize;
mod output;
mod run;
use error::NormalizeError;
use normalize::{Options, Variant};
use run::{run, Config};
use std::path::PathBuf;

fn main() {
    tool! {
        args:
            - input: PathBuf = PathBuf::from("../../public/Ranu-dictionary.txt");
            - alphabet_out: PathBuf = PathBuf::from("../../public/tamil-alphabets.txt");
                ? alphabet_out == input
                => "alphabet_out would overwrite the input"
            - variant: Variant = Variant::Extended;
            - words_out: PathBuf = PathBuf::from("../../public/tamil-words.txt");
                ? variant == Variant::Extended && (words_out == input || words_out == alphabet_out)
                => "words_out has to differ from input and alphabet_out"
            - drop_empty;
            - show;
            - summary;
        ;

        body: || {
            let config = Config {
                input,
                alphabet_out,
                words_out,
                options: Options { variant, drop_empty },
            };
            let report = run(&config)?;
            if show {
                println!("{} {:?}", report.alphabet.len(), report.alphabet);
            }
            if summary {
                emit_json(&report);
            }
            Ok::<(), NormalizeError>(())
        }
    }
}
