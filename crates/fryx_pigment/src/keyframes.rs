//! Keyframes for the built-in animations.

use phf::phf_map;

static KEYFRAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "spin" => "@keyframes spin {
  to {
    transform: rotate(360deg);
  }
}",
    "ping" => "@keyframes ping {
  75%, 100% {
    transform: scale(2);
    opacity: 0;
  }
}",
    "pulse" => "@keyframes pulse {
  50% {
    opacity: .5;
  }
}",
    "bounce" => "@keyframes bounce {
  0%, 100% {
    transform: translateY(-25%);
    animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
  }
  50% {
    transform: none;
    animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
  }
}",
};

/// The `@keyframes` block for a built-in animation name.
pub fn keyframes(name: &str) -> Option<&'static str> {
    KEYFRAMES.get(name).copied()
}
