mod chord;
mod delay;
mod press;
mod print_paced;
mod release;
mod send_key;
mod type_string;

pub use chord::Chord;
pub use delay::Delay;
pub use press::Press;
pub use print_paced::PrintPaced;
pub use release::Release;
pub use send_key::SendKey;
pub use type_string::TypeString;
